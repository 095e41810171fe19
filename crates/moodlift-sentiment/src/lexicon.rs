//! Word valence table.
//!
//! Valences range roughly from -4 (extremely negative) to +4 (extremely
//! positive). Keys are lowercase.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

// ── Positive ───────────────────────────────────────────────────────────────
const POSITIVE: &[(&str, f64)] = &[
    ("alright", 1.0),
    ("amazing", 2.8),
    ("appreciate", 2.1),
    ("appreciated", 2.3),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("blessed", 2.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("celebrate", 2.7),
    ("cheer", 2.3),
    ("cheerful", 2.5),
    ("comfort", 1.5),
    ("comfortable", 1.6),
    ("confident", 2.2),
    ("cool", 1.3),
    ("delighted", 2.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("fortunate", 1.9),
    ("free", 2.3),
    ("friend", 2.2),
    ("friends", 2.1),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("help", 1.7),
    ("helpful", 1.8),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("inspired", 2.2),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("kind", 2.4),
    ("laugh", 2.6),
    ("laughing", 2.2),
    ("like", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("lucky", 1.8),
    ("motivated", 1.6),
    ("nice", 1.8),
    ("ok", 0.9),
    ("okay", 0.9),
    ("optimistic", 1.3),
    ("peace", 2.5),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("positive", 2.6),
    ("pretty", 2.2),
    ("proud", 2.1),
    ("relaxed", 2.2),
    ("relief", 2.1),
    ("relieved", 1.6),
    ("safe", 1.9),
    ("smile", 1.5),
    ("smiling", 1.7),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("thank", 1.5),
    ("thankful", 2.7),
    ("thanks", 1.9),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("won", 2.7),
    ("yay", 2.4),
    ("yes", 1.7),
];

// ── Negative ───────────────────────────────────────────────────────────────
const NEGATIVE: &[(&str, f64)] = &[
    ("afraid", -2.0),
    ("alone", -1.0),
    ("angry", -2.3),
    ("annoying", -1.8),
    ("anxiety", -0.7),
    ("anxious", -1.0),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bored", -1.1),
    ("boring", -1.3),
    ("broke", -1.9),
    ("broken", -2.1),
    ("cry", -2.1),
    ("crying", -2.1),
    ("dead", -3.3),
    ("depressed", -2.3),
    ("die", -2.9),
    ("difficult", -1.5),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("drained", -1.3),
    ("dread", -2.4),
    ("exhausted", -1.5),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fear", -2.2),
    ("fired", -2.6),
    ("frustrated", -2.4),
    ("guilty", -1.8),
    ("hard", -0.4),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("ill", -1.8),
    ("lonely", -2.0),
    ("lose", -1.5),
    ("lost", -1.3),
    ("mess", -1.5),
    ("miserable", -2.2),
    ("miss", -0.6),
    ("nervous", -1.1),
    ("no", -1.2),
    ("pain", -2.3),
    ("panic", -2.3),
    ("problem", -1.7),
    ("problems", -1.7),
    ("regret", -1.8),
    ("sad", -2.1),
    ("scared", -1.9),
    ("shame", -2.1),
    ("sick", -2.3),
    ("sorry", -0.3),
    ("stress", -1.8),
    ("stressed", -1.4),
    ("struggle", -1.3),
    ("struggling", -1.4),
    ("stuck", -1.0),
    ("terrible", -2.1),
    ("tired", -1.9),
    ("trouble", -1.7),
    ("ugh", -1.8),
    ("upset", -1.6),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

static VALENCE: LazyLock<FxHashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    map.reserve(POSITIVE.len() + NEGATIVE.len());
    map.extend(POSITIVE.iter().chain(NEGATIVE.iter()).copied());
    map
});

/// Valence of a lowercase word, if it carries sentiment.
pub fn valence(word: &str) -> Option<f64> {
    VALENCE.get(word).copied()
}

/// Number of entries in the lexicon.
pub fn len() -> usize {
    VALENCE.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_consistent_signs() {
        assert!(POSITIVE.iter().all(|(_, v)| *v > 0.0));
        assert!(NEGATIVE.iter().all(|(_, v)| *v < 0.0));
    }

    #[test]
    fn no_duplicate_keys() {
        assert_eq!(len(), POSITIVE.len() + NEGATIVE.len());
    }

    #[test]
    fn keys_are_lowercase() {
        for (word, _) in POSITIVE.iter().chain(NEGATIVE.iter()) {
            assert_eq!(*word, word.to_lowercase(), "lexicon key {word} not lowercase");
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(valence("good"), Some(1.9));
        assert_eq!(valence("table"), None);
    }
}
