//! Patterns for sad, angry, anxious, and exhausted.

use super::MoodPattern;

// ── Sad ────────────────────────────────────────────────────────────────────
// Negation word, any gap, then a positive-state word: "isn't feeling great".
mood_pattern!(
    RE_SAD_NEGATED_POSITIVE,
    r"\b(not|don't|do not|isn't|is not|can't|cannot)\s+.*\s+(good|well|great|fine|okay|ok|alright)\b"
);

// Text opening with "feeling ..." followed by a state word.
mood_pattern!(
    RE_SAD_FEELING_STATE,
    r"^\s*(feeling|feel|feels)\s+(not)?\s*(good|well|great|fine|okay|ok|bad|terrible|horrible|awful|sick|down|low)\b"
);

mood_pattern!(
    RE_SAD_VOCABULARY,
    r"\b(sad|depressed|down|low|unhappy|miserable|hopeless|heartbroken|tearful|broken|hurt|pain|ache)\b"
);

mood_pattern!(
    RE_SAD_GRIEF,
    r"\b(crying|weeping|devastated|dejected|despondent|melancholy|gloomy)\b"
);

// ── Angry ──────────────────────────────────────────────────────────────────
mood_pattern!(
    RE_ANGRY_VOCABULARY,
    r"\b(angry|mad|furious|irritated|annoyed|frustrated|fuming|enraged|rage|livid|seething)\b"
);

// ── Anxious ────────────────────────────────────────────────────────────────
mood_pattern!(
    RE_ANXIOUS_VOCABULARY,
    r"\b(anxious|worried|nervous|stressed|overwhelmed|panicked|uneasy|fearful|scared|terrified|concerned)\b"
);

// ── Exhausted ──────────────────────────────────────────────────────────────
mood_pattern!(
    RE_EXHAUSTED_VOCABULARY,
    r"\b(exhausted|tired|fatigued|drained|weary|spent|worn out|burnt out|sleepy|worn)\b"
);

pub fn sad_patterns() -> Vec<MoodPattern> {
    vec![
        MoodPattern {
            name: "sad_negated_positive",
            regex: &RE_SAD_NEGATED_POSITIVE,
        },
        MoodPattern {
            name: "sad_feeling_state",
            regex: &RE_SAD_FEELING_STATE,
        },
        MoodPattern {
            name: "sad_vocabulary",
            regex: &RE_SAD_VOCABULARY,
        },
        MoodPattern {
            name: "sad_grief",
            regex: &RE_SAD_GRIEF,
        },
    ]
}

pub fn angry_patterns() -> Vec<MoodPattern> {
    vec![MoodPattern {
        name: "angry_vocabulary",
        regex: &RE_ANGRY_VOCABULARY,
    }]
}

pub fn anxious_patterns() -> Vec<MoodPattern> {
    vec![MoodPattern {
        name: "anxious_vocabulary",
        regex: &RE_ANXIOUS_VOCABULARY,
    }]
}

pub fn exhausted_patterns() -> Vec<MoodPattern> {
    vec![MoodPattern {
        name: "exhausted_vocabulary",
        regex: &RE_EXHAUSTED_VOCABULARY,
    }]
}
