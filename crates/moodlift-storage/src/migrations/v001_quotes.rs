//! V001: quotes table.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    mood TEXT NOT NULL,
    quote TEXT NOT NULL,
    author TEXT,
    category TEXT,
    keywords TEXT
);

CREATE INDEX IF NOT EXISTS idx_quotes_mood ON quotes(mood);
"#;
