//! Intensifiers, dampeners, and negations, plus the scalars they apply.

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

/// Added to a following word's magnitude by an intensifier ("very").
pub const BOOST_INCR: f64 = 0.293;
/// Added to a following word's magnitude by a dampener ("slightly").
pub const BOOST_DECR: f64 = -0.293;
/// Added to a word's magnitude when it is shouted in otherwise mixed-case text.
pub const CAPS_INCR: f64 = 0.733;
/// Multiplier applied to a word preceded by a negation.
pub const NEGATION_SCALAR: f64 = -0.74;
/// Clause weights around a contrastive "but".
pub const BEFORE_BUT_WEIGHT: f64 = 0.5;
pub const AFTER_BUT_WEIGHT: f64 = 1.5;
/// Per-mark emphasis for exclamation points, capped at four marks.
pub const EXCLAMATION_INCR: f64 = 0.292;
pub const MAX_EXCLAMATIONS: usize = 4;
/// Per-mark emphasis for repeated question marks (two or three).
pub const QUESTION_INCR: f64 = 0.18;
/// Emphasis for four or more question marks.
pub const QUESTION_MAX: f64 = 0.96;
/// How many preceding tokens are inspected for boosters and negations.
pub const LOOKBACK: usize = 3;

const INTENSIFIERS: &[&str] = &[
    "absolutely",
    "amazingly",
    "completely",
    "considerably",
    "deeply",
    "especially",
    "extremely",
    "fully",
    "greatly",
    "highly",
    "hugely",
    "incredibly",
    "intensely",
    "most",
    "particularly",
    "purely",
    "quite",
    "really",
    "remarkably",
    "so",
    "substantially",
    "super",
    "thoroughly",
    "totally",
    "tremendously",
    "truly",
    "unbelievably",
    "utterly",
    "very",
];

const DAMPENERS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "less",
    "little",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
    "sorta",
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt", "hasnt",
    "havent", "isnt", "mightnt", "mustnt", "neednt", "neither", "never", "none", "nope", "nor",
    "not", "nothing", "nowhere", "rarely", "seldom", "shouldnt", "wasnt", "werent", "without",
    "wont", "wouldnt",
];

static BOOSTERS: LazyLock<FxHashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    map.extend(INTENSIFIERS.iter().map(|w| (*w, BOOST_INCR)));
    map.extend(DAMPENERS.iter().map(|w| (*w, BOOST_DECR)));
    map
});

static NEGATION_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| NEGATIONS.iter().copied().collect());

/// Booster scalar for a lowercase word, if it is an intensifier or dampener.
pub fn booster(word: &str) -> Option<f64> {
    BOOSTERS.get(word).copied()
}

/// Whether a lowercase word negates what follows. Any "n't" contraction counts.
pub fn is_negation(word: &str) -> bool {
    NEGATION_SET.contains(word) || word.contains("n't")
}
