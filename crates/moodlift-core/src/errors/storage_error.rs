//! Storage errors.

use super::error_code::{self, MoodliftErrorCode};

/// Errors that can occur in the quote store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("Unknown mood label: {label}")]
    InvalidMood { label: String },
}

impl MoodliftErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
            Self::MigrationFailed { .. } => error_code::MIGRATION_ERROR,
            Self::InvalidMood { .. } => error_code::INVALID_MOOD,
        }
    }
}
