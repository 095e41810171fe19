//! # moodlift-classifier
//!
//! Classifies free-form text into a [`MoodLabel`](moodlift_core::MoodLabel).
//!
//! Two layers:
//! 1. Ordered pattern rules over the lowercased text. The first matching
//!    pattern decides; negative moods are checked before positive ones.
//! 2. When nothing matches, a sentiment score of the original text decides,
//!    with keyword disambiguation among negative moods.

pub mod engine;
pub mod fallback;
pub mod patterns;

pub use engine::{Classification, ClassificationSource, MoodClassifier};
pub use fallback::FallbackReason;
