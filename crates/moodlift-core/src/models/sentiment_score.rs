use serde::{Deserialize, Serialize};

use crate::errors::ScorerError;

/// Polarity scores for a single text.
///
/// `compound` is the normalized overall polarity in [-1, 1]. The ratios are
/// the proportions of the text's weight that are positive, negative and
/// neutral; together they sum to roughly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub compound: f64,
    pub neutral_ratio: f64,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
}

impl SentimentScore {
    /// A score carrying only compound and neutral ratio. The positive and
    /// negative ratios are zeroed.
    pub fn new(compound: f64, neutral_ratio: f64) -> Self {
        Self {
            compound,
            neutral_ratio,
            positive_ratio: 0.0,
            negative_ratio: 0.0,
        }
    }

    /// Score of a text with no sentiment-bearing tokens.
    pub fn neutral() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Check that compound lies in [-1, 1] and every ratio in [0, 1].
    pub fn validate(&self) -> Result<(), ScorerError> {
        if !self.compound.is_finite() || !(-1.0..=1.0).contains(&self.compound) {
            return Err(ScorerError::MalformedScore {
                field: "compound",
                value: self.compound,
            });
        }
        for (field, value) in [
            ("neutral_ratio", self.neutral_ratio),
            ("positive_ratio", self.positive_ratio),
            ("negative_ratio", self.negative_ratio),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ScorerError::MalformedScore { field, value });
            }
        }
        Ok(())
    }
}
