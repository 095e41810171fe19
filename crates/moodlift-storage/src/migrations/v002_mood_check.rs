//! V002: reject rows whose mood is outside the label set.
//!
//! SQLite cannot add a CHECK constraint to an existing table, so inserts and
//! updates are guarded by triggers instead.

pub const MIGRATION_SQL: &str = r#"
CREATE TRIGGER IF NOT EXISTS quotes_mood_insert_check
BEFORE INSERT ON quotes
WHEN NEW.mood NOT IN ('sad', 'happy', 'angry', 'anxious', 'exhausted', 'hopeful', 'grateful', 'neutral')
BEGIN
    SELECT RAISE(ABORT, 'invalid mood label');
END;

CREATE TRIGGER IF NOT EXISTS quotes_mood_update_check
BEFORE UPDATE OF mood ON quotes
WHEN NEW.mood NOT IN ('sad', 'happy', 'angry', 'anxious', 'exhausted', 'hopeful', 'grateful', 'neutral')
BEGIN
    SELECT RAISE(ABORT, 'invalid mood label');
END;
"#;
