//! # moodlift-storage
//!
//! SQLite persistence for supporting quotes. A single `quotes` table keyed by
//! mood; retrieval picks one row uniformly at random and falls back to a
//! default message when a mood has no quotes.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod seed;
pub mod store;

pub use connection::DatabaseManager;
pub use store::QuoteStore;
