pub mod message_store;
pub mod sentiment_scorer;

pub use message_store::MessageStore;
pub use sentiment_scorer::SentimentScorer;
