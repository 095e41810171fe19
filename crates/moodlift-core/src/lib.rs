//! # moodlift-core
//!
//! Foundation crate for Moodlift.
//! Defines the mood label set, score and quote models, the scorer and store
//! traits, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod mood;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MoodliftConfig;
pub use errors::{AppError, ClassifyError, ConfigError, ScorerError, StorageError};
pub use models::{NewQuote, Quote, SentimentScore};
pub use mood::MoodLabel;
pub use traits::{MessageStore, SentimentScorer};
