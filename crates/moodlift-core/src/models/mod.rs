pub mod quote;
pub mod sentiment_score;

pub use quote::{NewQuote, Quote};
pub use sentiment_score::SentimentScore;
