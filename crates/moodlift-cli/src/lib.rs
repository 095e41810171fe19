//! # moodlift-cli
//!
//! Presentation shell for Moodlift. [`Runtime`] wires the classifier to the
//! quote store; the `commands` module renders results for a terminal.

pub mod args;
pub mod commands;
pub mod exit;
pub mod runtime;

pub use args::{Cli, Command};
pub use exit::{exit_code_for_error, CliExitCode};
pub use runtime::{Response, Runtime};
