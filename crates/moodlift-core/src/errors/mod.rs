//! Error handling for Moodlift.
//! One error enum per subsystem, `thiserror` only.

pub mod app_error;
pub mod classify_error;
pub mod config_error;
pub mod error_code;
pub mod scorer_error;
pub mod storage_error;

pub use app_error::AppError;
pub use classify_error::ClassifyError;
pub use config_error::ConfigError;
pub use error_code::MoodliftErrorCode;
pub use scorer_error::ScorerError;
pub use storage_error::StorageError;
