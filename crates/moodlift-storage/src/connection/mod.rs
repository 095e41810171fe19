//! Connection management: a single serialized connection.

pub mod pragmas;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use moodlift_core::errors::StorageError;
use rusqlite::Connection;

use self::pragmas::apply_pragmas;
use crate::migrations;

/// Owns the SQLite connection. Every access goes through the mutex.
pub struct DatabaseManager {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open a database at the given path, apply pragmas, run migrations.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|e| StorageError::SqliteError {
            message: format!("open {}: {e}", path.display()),
        })?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    /// Open an in-memory database.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self, StorageError> {
        apply_pragmas(&conn)?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Execute an operation with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::SqliteError {
            message: "connection lock poisoned".to_string(),
        })?;
        f(&guard)
    }

    /// Get the database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
