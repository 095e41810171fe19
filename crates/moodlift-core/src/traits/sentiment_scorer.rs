use crate::errors::ScorerError;
use crate::models::SentimentScore;

/// Produces polarity scores for a text.
///
/// Implementations receive the text exactly as the user wrote it; case and
/// punctuation carry signal.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<SentimentScore, ScorerError>;

    /// Human-readable scorer name.
    fn name(&self) -> &str;
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for &T {
    fn score(&self, text: &str) -> Result<SentimentScore, ScorerError> {
        (**self).score(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
