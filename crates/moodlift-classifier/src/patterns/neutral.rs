//! Patterns for neutral.

use super::MoodPattern;

// Whole input is a single short acknowledgement.
mood_pattern!(
    RE_NEUTRAL_ACKNOWLEDGEMENT,
    r"^\s*(okay|ok|fine|alright|neutral|normal)\s*$"
);

mood_pattern!(
    RE_NEUTRAL_CALM,
    r"\b(calm|peaceful|serene|balanced|content)\b"
);

pub fn neutral_patterns() -> Vec<MoodPattern> {
    vec![
        MoodPattern {
            name: "neutral_acknowledgement",
            regex: &RE_NEUTRAL_ACKNOWLEDGEMENT,
        },
        MoodPattern {
            name: "neutral_calm",
            regex: &RE_NEUTRAL_CALM,
        },
    ]
}
