//! # moodlift-sentiment
//!
//! Valence-lexicon sentiment scoring. Each token is looked up in a weighted
//! lexicon, then adjusted for intensifiers, negation, capitalization,
//! contrastive "but", and exclamation/question emphasis. The summed valence
//! is normalized into a compound score in [-1, 1].

pub mod analyzer;
pub mod lexicon;
pub mod modifiers;

pub use analyzer::LexiconScorer;
