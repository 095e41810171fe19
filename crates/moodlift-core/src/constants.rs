/// Moodlift version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Message returned by a store when no quote is tagged with the requested mood.
pub const DEFAULT_MESSAGE: &str = "Stay positive! Every day is a chance to grow.";

/// Default SQLite database file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "quotes.db";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "moodlift.toml";

/// Default log filter when neither `RUST_LOG` nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Compound score at or above which unmatched text counts as happy.
pub const POSITIVE_COMPOUND_THRESHOLD: f64 = 0.05;

/// Compound score at or below which unmatched text counts as negative.
pub const NEGATIVE_COMPOUND_THRESHOLD: f64 = -0.05;

/// Neutral ratio above which low-polarity text is considered neutral vocabulary.
pub const NEUTRAL_RATIO_THRESHOLD: f64 = 0.8;
