//! Top-level Moodlift configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{LogFormat, LoggingConfig, StorageConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MOODLIFT_*`)
/// 3. Project config (`moodlift.toml` in the project root)
/// 4. User config (`~/.moodlift/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MoodliftConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}

impl MoodliftConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config. Only a parse failure is fatal.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(path = %user_config_path.display(), error = %err, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &MoodliftConfig) -> Result<(), ConfigError> {
        if let Some(ref path) = config.storage.database_path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.database_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref message) = config.storage.default_message {
            if message.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.default_message".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref level) = config.logging.level {
            // Accept a bare level or a full EnvFilter directive list.
            let bare = !level.contains('=') && !level.contains(',');
            if bare && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.level".to_string(),
                    message: format!("must be one of {}", LOG_LEVELS.join(", ")),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.moodlift/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut MoodliftConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MoodliftConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut MoodliftConfig, other: &MoodliftConfig) {
        if other.storage.database_path.is_some() {
            base.storage.database_path = other.storage.database_path.clone();
        }
        if other.storage.default_message.is_some() {
            base.storage.default_message = other.storage.default_message.clone();
        }
        if other.storage.seed_on_open.is_some() {
            base.storage.seed_on_open = other.storage.seed_on_open;
        }

        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
        if other.logging.format.is_some() {
            base.logging.format = other.logging.format;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `MOODLIFT_STORAGE_DATABASE_PATH`, `MOODLIFT_LOG_LEVEL`, etc.
    fn apply_env_overrides(config: &mut MoodliftConfig) {
        if let Ok(val) = std::env::var("MOODLIFT_STORAGE_DATABASE_PATH") {
            config.storage.database_path = Some(val);
        }
        if let Ok(val) = std::env::var("MOODLIFT_STORAGE_DEFAULT_MESSAGE") {
            config.storage.default_message = Some(val);
        }
        if let Ok(val) = std::env::var("MOODLIFT_STORAGE_SEED_ON_OPEN") {
            if let Ok(v) = val.parse::<bool>() {
                config.storage.seed_on_open = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MOODLIFT_LOG_LEVEL") {
            config.logging.level = Some(val);
        }
        if let Ok(val) = std::env::var("MOODLIFT_LOG_FORMAT") {
            match val.to_ascii_lowercase().as_str() {
                "json" => config.logging.format = Some(LogFormat::Json),
                "text" => config.logging.format = Some(LogFormat::Text),
                _ => {}
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut MoodliftConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.database_path {
            config.storage.database_path = Some(v.clone());
        }
        if let Some(ref v) = cli.log_level {
            config.logging.level = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.moodlift/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".moodlift"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
