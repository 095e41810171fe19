//! Top-level errors for a classify-then-fetch request.

use super::error_code::{self, MoodliftErrorCode};
use super::{ClassifyError, ConfigError, StorageError};

/// Errors surfaced to the presentation layer.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Input text is empty")]
    EmptyInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MoodliftErrorCode for AppError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Classify(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::EmptyInput => error_code::EMPTY_INPUT,
            Self::Io(_) => error_code::IO_ERROR,
        }
    }
}
