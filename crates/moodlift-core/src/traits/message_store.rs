use crate::errors::StorageError;
use crate::mood::MoodLabel;

/// Supplies one supporting message for a mood.
pub trait MessageStore: Send + Sync {
    /// Return one message chosen uniformly at random among those tagged with
    /// `mood`, or the store's default message when none are tagged.
    fn fetch(&self, mood: MoodLabel) -> Result<String, StorageError>;
}
