use moodlift_core::errors::{ClassifyError, ScorerError};
use moodlift_core::traits::SentimentScorer;
use moodlift_core::{MoodLabel, SentimentScore};
use serde::Serialize;

use crate::fallback::{self, FallbackReason};
use crate::patterns;

/// Where a classification came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassificationSource {
    /// A pattern rule matched; `pattern` names it.
    Rule { pattern: &'static str },
    /// No rule matched; the sentiment score decided.
    Fallback {
        score: SentimentScore,
        reason: FallbackReason,
    },
}

/// A mood together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub mood: MoodLabel,
    pub source: ClassificationSource,
}

/// Classifies text into a mood using the rule table, falling back to `S`.
///
/// Stateless apart from the scorer; share it freely across threads when
/// `S: Sync`.
pub struct MoodClassifier<S> {
    scorer: S,
}

impl<S: SentimentScorer> MoodClassifier<S> {
    pub fn new(scorer: S) -> Self {
        for name in patterns::pattern_health() {
            tracing::warn!(pattern = name, "mood pattern failed to compile and is disabled");
        }
        Self { scorer }
    }

    /// Classify `text`.
    ///
    /// Callers must not pass empty input; skip classification instead.
    /// Fails only when the sentiment scorer fails or returns a malformed score.
    pub fn classify(&self, text: &str) -> Result<MoodLabel, ClassifyError> {
        self.classify_detailed(text).map(|c| c.mood)
    }

    /// Classify `text` and report which rule or fallback branch decided.
    pub fn classify_detailed(&self, text: &str) -> Result<Classification, ClassifyError> {
        let span = tracing::debug_span!("moodlift.classify", chars = text.chars().count());
        let _guard = span.enter();

        // Lowercasing is for pattern matching only; the scorer sees `text`.
        let normalized = text.to_lowercase();

        if let Some(hit) = patterns::first_match(&normalized) {
            tracing::debug!(mood = %hit.mood, pattern = hit.pattern, "pattern rule matched");
            return Ok(Classification {
                mood: hit.mood,
                source: ClassificationSource::Rule {
                    pattern: hit.pattern,
                },
            });
        }

        let score = self.scorer.score(text)?;
        score.validate().map_err(|e| match e {
            ScorerError::MalformedScore { field, value } => {
                ClassifyError::MalformedScore { field, value }
            }
            other => ClassifyError::Scorer(other),
        })?;

        let (mood, reason) = fallback::decide(&score, &normalized);
        tracing::debug!(
            mood = %mood,
            ?reason,
            compound = score.compound,
            neutral_ratio = score.neutral_ratio,
            scorer = self.scorer.name(),
            "sentiment fallback decided"
        );

        Ok(Classification {
            mood,
            source: ClassificationSource::Fallback { score, reason },
        })
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}
