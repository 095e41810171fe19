//! Stub scorers shared by the classifier tests.

#![allow(dead_code)]

use std::sync::Mutex;

use moodlift_core::errors::ScorerError;
use moodlift_core::traits::SentimentScorer;
use moodlift_core::SentimentScore;

/// Always returns the same score.
pub struct FixedScorer(pub SentimentScore);

impl FixedScorer {
    pub fn compound(compound: f64) -> Self {
        Self(SentimentScore::new(compound, 0.5))
    }
}

impl SentimentScorer for FixedScorer {
    fn score(&self, _text: &str) -> Result<SentimentScore, ScorerError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Records every text it is asked to score.
#[derive(Default)]
pub struct RecordingScorer {
    pub seen: Mutex<Vec<String>>,
}

impl SentimentScorer for RecordingScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, ScorerError> {
        self.seen.lock().unwrap().push(text.to_string());
        Ok(SentimentScore::neutral())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Always unavailable.
pub struct FailingScorer;

impl SentimentScorer for FailingScorer {
    fn score(&self, _text: &str) -> Result<SentimentScore, ScorerError> {
        Err(ScorerError::Unavailable {
            reason: "model not loaded".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}
