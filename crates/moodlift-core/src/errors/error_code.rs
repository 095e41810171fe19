//! Stable error codes surfaced to the CLI and JSON output.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCORER_ERROR: &str = "SCORER_ERROR";
pub const MALFORMED_SCORE: &str = "MALFORMED_SCORE";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_ERROR: &str = "MIGRATION_ERROR";
pub const INVALID_MOOD: &str = "INVALID_MOOD";
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const IO_ERROR: &str = "IO_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait MoodliftErrorCode {
    fn error_code(&self) -> &'static str;
}
