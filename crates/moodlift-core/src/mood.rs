//! The closed set of mood labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A mood category produced by classification.
///
/// Variant order matches rule priority: negative moods are evaluated before
/// positive ones so that negated-positive phrasing resolves to `Sad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Sad,
    Happy,
    Angry,
    Anxious,
    Exhausted,
    Hopeful,
    Grateful,
    Neutral,
}

impl MoodLabel {
    /// All labels, in rule-priority order.
    pub const ALL: [MoodLabel; 8] = [
        Self::Sad,
        Self::Happy,
        Self::Angry,
        Self::Anxious,
        Self::Exhausted,
        Self::Hopeful,
        Self::Grateful,
        Self::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sad => "sad",
            Self::Happy => "happy",
            Self::Angry => "angry",
            Self::Anxious => "anxious",
            Self::Exhausted => "exhausted",
            Self::Hopeful => "hopeful",
            Self::Grateful => "grateful",
            Self::Neutral => "neutral",
        }
    }

    /// Parse a stored or user-supplied label. Case-insensitive, trims whitespace.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the eight mood labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood label: {0}")]
pub struct UnknownMood(pub String);

impl FromStr for MoodLabel {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownMood(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_priority_order() {
        let names: Vec<_> = MoodLabel::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            names,
            ["sad", "happy", "angry", "anxious", "exhausted", "hopeful", "grateful", "neutral"]
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(MoodLabel::parse(" Happy "), Some(MoodLabel::Happy));
        assert_eq!("GRATEFUL".parse::<MoodLabel>(), Ok(MoodLabel::Grateful));
        assert!("bored".parse::<MoodLabel>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&MoodLabel::Exhausted).unwrap();
        assert_eq!(json, "\"exhausted\"");
        let back: MoodLabel = serde_json::from_str("\"anxious\"").unwrap();
        assert_eq!(back, MoodLabel::Anxious);
    }
}
