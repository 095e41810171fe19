//! Classify-then-fetch pipeline shared by every front end.

use std::path::Path;

use moodlift_classifier::{ClassificationSource, MoodClassifier};
use moodlift_core::traits::{MessageStore, SentimentScorer};
use moodlift_core::{AppError, MoodLabel, MoodliftConfig};
use moodlift_sentiment::LexiconScorer;
use moodlift_storage::QuoteStore;
use serde::Serialize;

/// What the user sees for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub mood: MoodLabel,
    pub message: String,
    pub source: ClassificationSource,
}

pub struct Runtime<S = LexiconScorer, M = QuoteStore> {
    classifier: MoodClassifier<S>,
    store: M,
}

impl Runtime {
    /// Open the configured quote store and pair it with the lexicon scorer.
    /// Seeds an empty store when `storage.seed_on_open` is set.
    pub fn from_config(config: &MoodliftConfig, root: &Path) -> Result<Self, AppError> {
        let store = open_store(config, root)?;
        if config.storage.effective_seed_on_open() {
            store.seed_if_empty()?;
        }
        Ok(Self::new(MoodClassifier::new(LexiconScorer::new()), store))
    }
}

/// Open the configured quote store. Relative database paths resolve against
/// `root`.
pub fn open_store(config: &MoodliftConfig, root: &Path) -> Result<QuoteStore, AppError> {
    let db_path = root.join(config.storage.effective_database_path());
    tracing::debug!(path = %db_path.display(), "opening quote store");
    let store = QuoteStore::open(&db_path)?
        .with_default_message(config.storage.effective_default_message());
    Ok(store)
}

impl<S: SentimentScorer, M: MessageStore> Runtime<S, M> {
    pub fn new(classifier: MoodClassifier<S>, store: M) -> Self {
        Self { classifier, store }
    }

    /// Classify `text` and fetch a message for its mood.
    ///
    /// Blank input is rejected before classification.
    pub fn respond(&self, text: &str) -> Result<Response, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::EmptyInput);
        }
        let classification = self.classifier.classify_detailed(text)?;
        let message = self.store.fetch(classification.mood)?;
        Ok(Response {
            mood: classification.mood,
            message,
            source: classification.source,
        })
    }

    pub fn store(&self) -> &M {
        &self.store
    }

    pub fn classifier(&self) -> &MoodClassifier<S> {
        &self.classifier
    }
}
