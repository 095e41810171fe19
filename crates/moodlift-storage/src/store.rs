use std::path::Path;

use moodlift_core::constants::DEFAULT_MESSAGE;
use moodlift_core::errors::StorageError;
use moodlift_core::models::{NewQuote, Quote};
use moodlift_core::traits::MessageStore;
use moodlift_core::MoodLabel;

use crate::connection::DatabaseManager;
use crate::queries::quotes;
use crate::seed;

/// Quote store over SQLite.
///
/// Retrieval never fails for lack of data: a mood with no quotes, or a label
/// outside the mood set, yields the default message.
pub struct QuoteStore {
    db: DatabaseManager,
    default_message: String,
}

impl QuoteStore {
    /// Open (creating if needed) the database at `path`.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Ok(Self::from_manager(DatabaseManager::open(path)?))
    }

    /// Open an empty in-memory store.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self::from_manager(DatabaseManager::open_in_memory()?))
    }

    fn from_manager(db: DatabaseManager) -> Self {
        Self {
            db,
            default_message: DEFAULT_MESSAGE.to_string(),
        }
    }

    /// Replace the message returned when no quote matches.
    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = message.into();
        self
    }

    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    pub fn path(&self) -> Option<&Path> {
        self.db.path()
    }

    /// Insert the built-in sample quotes if the table is empty.
    pub fn seed_if_empty(&self) -> Result<usize, StorageError> {
        let _span = tracing::info_span!("moodlift.seed").entered();
        self.db.with_conn(seed::seed_if_empty)
    }

    /// Add a quote. The mood must be one of the eight labels.
    pub fn insert(&self, quote: &NewQuote) -> Result<i64, StorageError> {
        let normalized = normalize_mood(quote)?;
        self.db.with_conn(|conn| quotes::insert(conn, &normalized))
    }

    /// Add several quotes atomically.
    pub fn insert_batch(&self, batch: &[NewQuote]) -> Result<usize, StorageError> {
        let normalized = batch
            .iter()
            .map(normalize_mood)
            .collect::<Result<Vec<_>, _>>()?;
        self.db.with_conn(|conn| quotes::insert_batch(conn, &normalized))
    }

    pub fn count(&self) -> Result<i64, StorageError> {
        self.db.with_conn(quotes::count)
    }

    /// Quote count for every label in priority order, zero included.
    pub fn count_by_mood(&self) -> Result<Vec<(MoodLabel, i64)>, StorageError> {
        let grouped = self.db.with_conn(quotes::count_by_mood)?;
        Ok(MoodLabel::ALL
            .into_iter()
            .map(|mood| {
                let n = grouped
                    .iter()
                    .find(|(label, _)| label == mood.as_str())
                    .map_or(0, |(_, n)| *n);
                (mood, n)
            })
            .collect())
    }

    /// All quotes tagged with `mood`.
    pub fn quotes_for(&self, mood: MoodLabel) -> Result<Vec<Quote>, StorageError> {
        self.db.with_conn(|conn| quotes::query_by_mood(conn, mood.as_str()))
    }

    /// One random quote row for a raw label, if any.
    pub fn random_quote(&self, mood: &str) -> Result<Option<Quote>, StorageError> {
        self.db.with_conn(|conn| quotes::random_quote(conn, mood))
    }

    /// Fetch a message for a raw label. Unknown labels behave like a mood
    /// with no quotes.
    pub fn fetch_by_name(&self, mood: &str) -> Result<String, StorageError> {
        let _span = tracing::debug_span!("moodlift.fetch", mood).entered();
        let Some(label) = MoodLabel::parse(mood) else {
            tracing::debug!("unknown mood label, using default message");
            return Ok(self.default_message.clone());
        };
        match self.random_quote(label.as_str())? {
            Some(q) => Ok(q.quote),
            None => {
                tracing::debug!("no quotes for mood, using default message");
                Ok(self.default_message.clone())
            }
        }
    }
}

impl MessageStore for QuoteStore {
    fn fetch(&self, mood: MoodLabel) -> Result<String, StorageError> {
        self.fetch_by_name(mood.as_str())
    }
}

/// Canonicalize the mood column to its lowercase label.
fn normalize_mood(quote: &NewQuote) -> Result<NewQuote, StorageError> {
    let label = MoodLabel::parse(&quote.mood).ok_or_else(|| StorageError::InvalidMood {
        label: quote.mood.clone(),
    })?;
    Ok(NewQuote {
        mood: label.as_str().to_string(),
        ..quote.clone()
    })
}
