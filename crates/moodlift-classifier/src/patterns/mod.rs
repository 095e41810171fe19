//! The fixed, ordered rule table.
//!
//! Each mood owns an ordered list of patterns; the table lists moods in
//! priority order. Patterns compile lazily on first use and are shared
//! read-only afterwards.

macro_rules! mood_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}

pub mod negative;
pub mod neutral;
pub mod positive;

use std::sync::LazyLock;

use moodlift_core::MoodLabel;
use regex::Regex;

/// A named, lazily compiled pattern. `None` means the regex failed to
/// compile; such a pattern never matches.
pub struct MoodPattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

impl MoodPattern {
    pub fn is_match(&self, normalized: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|re| re.is_match(normalized))
    }
}

/// A mood and the patterns that select it, in evaluation order.
pub struct PatternRule {
    pub mood: MoodLabel,
    pub patterns: Vec<MoodPattern>,
}

/// The first rule and pattern that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub mood: MoodLabel,
    pub pattern: &'static str,
}

static RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        PatternRule {
            mood: MoodLabel::Sad,
            patterns: negative::sad_patterns(),
        },
        PatternRule {
            mood: MoodLabel::Happy,
            patterns: positive::happy_patterns(),
        },
        PatternRule {
            mood: MoodLabel::Angry,
            patterns: negative::angry_patterns(),
        },
        PatternRule {
            mood: MoodLabel::Anxious,
            patterns: negative::anxious_patterns(),
        },
        PatternRule {
            mood: MoodLabel::Exhausted,
            patterns: negative::exhausted_patterns(),
        },
        PatternRule {
            mood: MoodLabel::Hopeful,
            patterns: positive::hopeful_patterns(),
        },
        PatternRule {
            mood: MoodLabel::Grateful,
            patterns: positive::grateful_patterns(),
        },
        PatternRule {
            mood: MoodLabel::Neutral,
            patterns: neutral::neutral_patterns(),
        },
    ]
});

/// The rule table in priority order.
pub fn rules() -> &'static [PatternRule] {
    &RULES
}

/// Evaluate rules in order against already-lowercased text and return the
/// first hit. Short-circuits: later rules are never tested after a match.
pub fn first_match(normalized: &str) -> Option<RuleMatch> {
    rules().iter().find_map(|rule| {
        rule.patterns
            .iter()
            .find(|p| p.is_match(normalized))
            .map(|p| RuleMatch {
                mood: rule.mood,
                pattern: p.name,
            })
    })
}

/// Names of patterns whose regex failed to compile.
pub fn pattern_health() -> Vec<&'static str> {
    rules()
        .iter()
        .flat_map(|rule| rule.patterns.iter())
        .filter(|p| p.regex.is_none())
        .map(|p| p.name)
        .collect()
}
