//! Patterns for happy, hopeful, and grateful.

use super::MoodPattern;

// ── Happy ──────────────────────────────────────────────────────────────────
mood_pattern!(
    RE_HAPPY_VOCABULARY,
    r"\b(happy|joyful|cheerful|excited|thrilled|delighted|great|amazing|wonderful|fantastic|awesome|brilliant)\b"
);

mood_pattern!(
    RE_HAPPY_FEELING_GOOD,
    r"\b(feel|feeling|feels)\s+(good|great|wonderful|amazing|awesome|fantastic|excellent|positive|happy|joyful)\b"
);

// ── Hopeful ────────────────────────────────────────────────────────────────
mood_pattern!(
    RE_HOPEFUL_VOCABULARY,
    r"\b(hopeful|optimistic|positive|confident|motivated|inspired|determined|focused|driven)\b"
);

// ── Grateful ───────────────────────────────────────────────────────────────
mood_pattern!(
    RE_GRATEFUL_VOCABULARY,
    r"\b(grateful|thankful|blessed|appreciative|lucky|fortunate)\b"
);

pub fn happy_patterns() -> Vec<MoodPattern> {
    vec![
        MoodPattern {
            name: "happy_vocabulary",
            regex: &RE_HAPPY_VOCABULARY,
        },
        MoodPattern {
            name: "happy_feeling_good",
            regex: &RE_HAPPY_FEELING_GOOD,
        },
    ]
}

pub fn hopeful_patterns() -> Vec<MoodPattern> {
    vec![MoodPattern {
        name: "hopeful_vocabulary",
        regex: &RE_HOPEFUL_VOCABULARY,
    }]
}

pub fn grateful_patterns() -> Vec<MoodPattern> {
    vec![MoodPattern {
        name: "grateful_vocabulary",
        regex: &RE_GRATEFUL_VOCABULARY,
    }]
}
