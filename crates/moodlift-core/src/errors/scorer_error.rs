//! Sentiment scorer errors.

use super::error_code::{self, MoodliftErrorCode};

/// Errors raised by a [`SentimentScorer`](crate::traits::SentimentScorer).
#[derive(Debug, thiserror::Error)]
pub enum ScorerError {
    #[error("Sentiment scorer unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Sentiment scorer produced malformed {field}: {value}")]
    MalformedScore { field: &'static str, value: f64 },
}

impl MoodliftErrorCode for ScorerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::SCORER_ERROR,
            Self::MalformedScore { .. } => error_code::MALFORMED_SCORE,
        }
    }
}
