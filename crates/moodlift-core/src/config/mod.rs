//! Configuration system for Moodlift.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod logging_config;
pub mod moodlift_config;
pub mod storage_config;

pub use logging_config::{LogFormat, LoggingConfig};
pub use moodlift_config::{CliOverrides, MoodliftConfig};
pub use storage_config::StorageConfig;
