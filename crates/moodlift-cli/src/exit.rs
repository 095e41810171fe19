//! Process exit codes.

use moodlift_core::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    /// Classification, storage, or I/O failure.
    Failure = 1,
    /// Configuration could not be loaded or validated.
    Config = 2,
}

impl CliExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

pub fn exit_code_for_error(err: &AppError) -> CliExitCode {
    match err {
        AppError::Config(_) => CliExitCode::Config,
        _ => CliExitCode::Failure,
    }
}
