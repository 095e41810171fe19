//! Queries for the quotes table.

use moodlift_core::errors::StorageError;
use moodlift_core::models::{NewQuote, Quote};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_COLUMNS: &str = "SELECT id, mood, quote, author, category, keywords FROM quotes";

fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

/// Insert a quote, returning its id.
pub fn insert(conn: &Connection, quote: &NewQuote) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO quotes (mood, quote, author, category, keywords)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            quote.mood,
            quote.quote,
            quote.author,
            quote.category,
            quote.keywords,
        ],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// Insert a batch of quotes in one transaction. All or nothing.
pub fn insert_batch(conn: &Connection, quotes: &[NewQuote]) -> Result<usize, StorageError> {
    let tx = conn.unchecked_transaction().map_err(sqlite_err)?;
    {
        let mut stmt = tx
            .prepare_cached(
                "INSERT INTO quotes (mood, quote, author, category, keywords)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .map_err(sqlite_err)?;
        for quote in quotes {
            stmt.execute(params![
                quote.mood,
                quote.quote,
                quote.author,
                quote.category,
                quote.keywords,
            ])
            .map_err(sqlite_err)?;
        }
    }
    tx.commit().map_err(sqlite_err)?;
    Ok(quotes.len())
}

/// One quote for `mood`, chosen uniformly at random, or None.
pub fn random_quote(conn: &Connection, mood: &str) -> Result<Option<Quote>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE mood = ?1 ORDER BY RANDOM() LIMIT 1"
        ))
        .map_err(sqlite_err)?;
    stmt.query_row(params![mood], map_row)
        .optional()
        .map_err(sqlite_err)
}

/// All quotes for `mood`, by id.
pub fn query_by_mood(conn: &Connection, mood: &str) -> Result<Vec<Quote>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_COLUMNS} WHERE mood = ?1 ORDER BY id ASC"))
        .map_err(sqlite_err)?;
    let rows = stmt.query_map(params![mood], map_row).map_err(sqlite_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}

/// Total number of quotes.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))
        .map_err(sqlite_err)
}

/// Quote counts grouped by mood label, only for moods that have quotes.
pub fn count_by_mood(conn: &Connection) -> Result<Vec<(String, i64)>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT mood, COUNT(*) FROM quotes GROUP BY mood ORDER BY mood")
        .map_err(sqlite_err)?;
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(sqlite_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Quote> {
    Ok(Quote {
        id: row.get(0)?,
        mood: row.get(1)?,
        quote: row.get(2)?,
        author: row.get(3)?,
        category: row.get(4)?,
        keywords: row.get(5)?,
    })
}
