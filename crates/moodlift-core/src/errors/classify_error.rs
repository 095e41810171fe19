//! Classification errors.
//!
//! The classifier has no failure modes of its own: every variant wraps a
//! failure of the sentiment dependency.

use super::error_code::{self, MoodliftErrorCode};
use super::ScorerError;

/// Errors that can occur while classifying a text.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("Sentiment scoring failed: {0}")]
    Scorer(#[from] ScorerError),

    #[error("Sentiment score out of range: {field} = {value}")]
    MalformedScore { field: &'static str, value: f64 },
}

impl MoodliftErrorCode for ClassifyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scorer(e) => e.error_code(),
            Self::MalformedScore { .. } => error_code::MALFORMED_SCORE,
        }
    }
}
