//! Quote store configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATABASE_PATH, DEFAULT_MESSAGE};

/// Configuration for the quote store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file. Default: `quotes.db`.
    pub database_path: Option<String>,
    /// Message returned when no quote matches a mood.
    pub default_message: Option<String>,
    /// Insert the built-in sample quotes when the table is empty. Default: true.
    pub seed_on_open: Option<bool>,
}

impl StorageConfig {
    pub fn effective_database_path(&self) -> &str {
        self.database_path.as_deref().unwrap_or(DEFAULT_DATABASE_PATH)
    }

    pub fn effective_default_message(&self) -> &str {
        self.default_message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }

    pub fn effective_seed_on_open(&self) -> bool {
        self.seed_on_open.unwrap_or(true)
    }
}
