//! Tracing subscriber initialization.
//!
//! Filter precedence: an explicit command-line level, then `RUST_LOG`, then
//! the configured level. Output goes to stderr so stdout stays clean for
//! command output.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter: `cli_level` when given, else `RUST_LOG` when set, else
/// `configured`.
pub fn build_filter(cli_level: Option<&str>, configured: &str) -> EnvFilter {
    match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_tracing(config: &LoggingConfig, cli_level: Option<&str>) {
    let filter = build_filter(cli_level, config.effective_level());
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = match config.effective_format() {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
