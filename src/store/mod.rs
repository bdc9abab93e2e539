//! Keybind storage backed by SQLite
//!
//! One [`Store`] owns one connection for the whole session. Every public
//! operation is a single statement, so each either fully applies or leaves the
//! database unchanged.

mod categories;
mod error;
mod keybinds;
mod models;

pub use error::StoreError;
pub use models::{Category, Keybind, KeybindGroups, DEFAULT_CATEGORY, UNCATEGORIZED};

use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS category (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL
);

CREATE TABLE IF NOT EXISTS keybind (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    keys TEXT UNIQUE NOT NULL,
    description TEXT,
    category_id INTEGER REFERENCES category (id) ON DELETE SET NULL
);
";

/// Handle to the keybind database
#[derive(Debug)]
pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Open (or create) the database file, creating its directory if needed
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(&path).map_err(|source| StoreError::Unavailable {
            path: path.clone(),
            source,
        })?;

        Self::with_connection(conn, path)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let path = PathBuf::from(":memory:");
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Unavailable {
            path: path.clone(),
            source,
        })?;

        Self::with_connection(conn, path)
    }

    fn with_connection(conn: Connection, path: PathBuf) -> Result<Self, StoreError> {
        // Foreign keys are off by default in SQLite and are per-connection
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|source| StoreError::Unavailable {
                path: path.clone(),
                source,
            })?;

        Ok(Self { conn, path })
    }

    /// Ensure the schema and the default category exist. Safe to call on every start.
    pub fn initialize(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(SCHEMA)?;
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO category (name) VALUES (?1)",
            [DEFAULT_CATEGORY],
        )?;

        if inserted > 0 {
            tracing::info!(path = %self.path.display(), "Created default category");
        }
        tracing::debug!(path = %self.path.display(), "Keybind store initialized");

        Ok(())
    }

    /// Location of the database (`:memory:` for in-memory stores)
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_file_and_directory() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("nested").join("keybindings.db");

        let store = Store::open(&db_path).unwrap();
        store.initialize().unwrap();

        assert!(db_path.exists());
        assert_eq!(store.path(), db_path.as_path());
    }

    #[test]
    fn test_initialize_is_idempotent_across_reopen() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("keybindings.db");

        {
            let store = Store::open(&db_path).unwrap();
            store.initialize().unwrap();
            store.initialize().unwrap();
            store.create_category("Editing").unwrap();
        }

        let store = Store::open(&db_path).unwrap();
        store.initialize().unwrap();

        let categories = store.list_categories().unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["General", "Editing"]);
    }

    #[test]
    fn test_open_directory_path_is_unavailable() {
        let dir = TempDir::new().unwrap();

        // A directory cannot be opened as a database file
        let result = Store::open(dir.path()).and_then(|store| store.initialize());
        assert!(result.is_err());
        assert!(!result.unwrap_err().is_rejection());
    }
}
