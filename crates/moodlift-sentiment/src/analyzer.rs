use moodlift_core::errors::ScorerError;
use moodlift_core::models::SentimentScore;
use moodlift_core::traits::SentimentScorer;

use crate::lexicon;
use crate::modifiers::{
    self, AFTER_BUT_WEIGHT, BEFORE_BUT_WEIGHT, CAPS_INCR, EXCLAMATION_INCR, LOOKBACK,
    MAX_EXCLAMATIONS, NEGATION_SCALAR, QUESTION_INCR, QUESTION_MAX,
};

/// Normalization constant approximating the maximum expected summed valence.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Scorer backed by the built-in valence lexicon. Stateless and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

/// A whitespace token with surrounding punctuation removed.
struct Token<'a> {
    raw: &'a str,
    lower: String,
}

impl Token<'_> {
    /// All cased characters are uppercase and there are at least two of them.
    fn is_shouted(&self) -> bool {
        let mut letters = self.raw.chars().filter(|c| c.is_alphabetic());
        let mut count = 0;
        let all_upper = letters.all(|c| {
            count += 1;
            c.is_uppercase()
        });
        all_upper && count > 1
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score `text`. Never fails; text without sentiment words scores 0.
    pub fn polarity_scores(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScore {
                compound: 0.0,
                neutral_ratio: 0.0,
                positive_ratio: 0.0,
                negative_ratio: 0.0,
            };
        }

        let shouted = tokens.iter().filter(|t| t.is_shouted()).count();
        let caps_differential = shouted > 0 && shouted < tokens.len();

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| token_valence(&tokens, i, caps_differential))
            .collect();
        apply_but_weighting(&tokens, &mut sentiments);

        let emphasis = punctuation_emphasis(text);
        let mut sum: f64 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = round_to(normalize(sum), 4);

        let (positive_ratio, negative_ratio, neutral_ratio) = ratios(&sentiments, emphasis);

        tracing::trace!(
            tokens = tokens.len(),
            compound,
            neutral_ratio,
            "scored text"
        );

        SentimentScore {
            compound,
            neutral_ratio,
            positive_ratio,
            negative_ratio,
        }
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, ScorerError> {
        Ok(self.polarity_scores(text))
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase(),
        })
        .collect()
}

/// Valence of the token at `i` after caps, booster, and negation adjustments.
fn token_valence(tokens: &[Token<'_>], i: usize, caps_differential: bool) -> f64 {
    let token = &tokens[i];

    // Boosters modify their neighbours and carry no valence of their own.
    if modifiers::booster(&token.lower).is_some() {
        return 0.0;
    }
    let Some(mut valence) = lexicon::valence(&token.lower) else {
        return 0.0;
    };

    if caps_differential && token.is_shouted() {
        valence += CAPS_INCR * valence.signum();
    }

    for distance in 1..=LOOKBACK.min(i) {
        let prev = &tokens[i - distance];
        if let Some(mut scalar) = modifiers::booster(&prev.lower) {
            if valence < 0.0 {
                scalar = -scalar;
            }
            if caps_differential && prev.is_shouted() {
                scalar += CAPS_INCR * scalar.signum();
            }
            valence += scalar * distance_decay(distance);
        }
        if modifiers::is_negation(&prev.lower) {
            valence *= NEGATION_SCALAR;
        }
    }

    valence
}

/// Boosters further back have less effect.
fn distance_decay(distance: usize) -> f64 {
    match distance {
        1 => 1.0,
        2 => 0.95,
        _ => 0.9,
    }
}

/// Halve the clause before the first "but" and amplify the clause after it.
fn apply_but_weighting(tokens: &[Token<'_>], sentiments: &mut [f64]) {
    let Some(but_idx) = tokens.iter().position(|t| t.lower == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < but_idx {
            *s *= BEFORE_BUT_WEIGHT;
        } else if i > but_idx {
            *s *= AFTER_BUT_WEIGHT;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_MAX,
    };
    exclamations as f64 * EXCLAMATION_INCR + question_amp
}

/// Map an unbounded valence sum into [-1, 1].
fn normalize(sum: f64) -> f64 {
    let norm = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

/// (positive, negative, neutral) proportions of the text's weight.
fn ratios(sentiments: &[f64], emphasis: f64) -> (f64, f64, f64) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    if total <= 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (
        round_to(pos_sum / total, 3),
        round_to(neg_sum.abs() / total, 3),
        round_to(neu_count / total, 3),
    )
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_positive_word() {
        let score = LexiconScorer::new().polarity_scores("good");
        assert_eq!(score.compound, 0.4404);
        assert_eq!(score.positive_ratio, 1.0);
        assert_eq!(score.neutral_ratio, 0.0);
    }

    #[test]
    fn negation_flips_and_dampens() {
        let score = LexiconScorer::new().polarity_scores("not good");
        assert_eq!(score.compound, -0.3412);
    }

    #[test]
    fn surrounding_punctuation_is_stripped() {
        let tokens = tokenize("\"Well...\" (good) isn't");
        let words: Vec<_> = tokens.iter().map(|t| t.lower.as_str()).collect();
        assert_eq!(words, ["well", "good", "isn't"]);
    }

    #[test]
    fn single_capital_letter_is_not_shouting() {
        let tokens = tokenize("I GREAT");
        assert!(!tokens[0].is_shouted());
        assert!(tokens[1].is_shouted());
    }

    #[test]
    fn question_emphasis_steps() {
        assert_eq!(punctuation_emphasis("why?"), 0.0);
        assert!((punctuation_emphasis("why??") - 0.36).abs() < 1e-9);
        assert_eq!(punctuation_emphasis("why?????"), QUESTION_MAX);
    }

    #[test]
    fn exclamations_are_capped() {
        let four = punctuation_emphasis("yes!!!!");
        let nine = punctuation_emphasis("yes!!!!!!!!!");
        assert_eq!(four, nine);
    }
}
