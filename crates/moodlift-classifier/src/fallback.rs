//! Sentiment-score decision table, used only when no pattern rule matched.
//!
//! compound >= 0.05 → happy; compound <= -0.05 → anxious, exhausted, or sad
//! by keyword; anything in between → neutral.

use moodlift_core::constants::{
    NEGATIVE_COMPOUND_THRESHOLD, NEUTRAL_RATIO_THRESHOLD, POSITIVE_COMPOUND_THRESHOLD,
};
use moodlift_core::{MoodLabel, SentimentScore};
use serde::Serialize;

/// Checked first among negative texts. Plain substring containment.
pub const ANXIETY_KEYWORDS: [&str; 4] = ["anxious", "worried", "nervous", "stressed"];

/// Checked second among negative texts. Plain substring containment.
pub const EXHAUSTION_KEYWORDS: [&str; 3] = ["tired", "exhausted", "drained"];

/// Which branch of the decision table produced the mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    Positive,
    AnxietyKeyword,
    ExhaustionKeyword,
    Negative,
    /// Low polarity, neutral ratio above 0.8.
    ///
    /// Maps to neutral, same as [`FallbackReason::LowPolarity`]; the two are
    /// kept apart only so output can show which side of the ratio applied.
    NeutralVocabulary,
    /// Low polarity with a neutral ratio of 0.8 or less. Still neutral.
    LowPolarity,
}

impl FallbackReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::AnxietyKeyword => "anxiety_keyword",
            Self::ExhaustionKeyword => "exhaustion_keyword",
            Self::Negative => "negative",
            Self::NeutralVocabulary => "neutral_vocabulary",
            Self::LowPolarity => "low_polarity",
        }
    }
}

/// Decide a mood from a validated score and the lowercased text.
pub fn decide(score: &SentimentScore, normalized: &str) -> (MoodLabel, FallbackReason) {
    if score.compound >= POSITIVE_COMPOUND_THRESHOLD {
        return (MoodLabel::Happy, FallbackReason::Positive);
    }

    if score.compound <= NEGATIVE_COMPOUND_THRESHOLD {
        if contains_any(normalized, &ANXIETY_KEYWORDS) {
            return (MoodLabel::Anxious, FallbackReason::AnxietyKeyword);
        }
        if contains_any(normalized, &EXHAUSTION_KEYWORDS) {
            return (MoodLabel::Exhausted, FallbackReason::ExhaustionKeyword);
        }
        return (MoodLabel::Sad, FallbackReason::Negative);
    }

    // Both outcomes are neutral; the ratio only selects the recorded reason.
    let reason = if score.neutral_ratio > NEUTRAL_RATIO_THRESHOLD {
        FallbackReason::NeutralVocabulary
    } else {
        FallbackReason::LowPolarity
    };
    (MoodLabel::Neutral, reason)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
