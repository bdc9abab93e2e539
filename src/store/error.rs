//! Storage errors
//!
//! Rejections (uniqueness, referential integrity) leave the store unchanged and
//! are recoverable by the caller. Everything else means the store is unusable.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{field} '{value}' already exists")]
    UniquenessViolation { field: &'static str, value: String },

    #[error("category {category_id} does not exist")]
    ReferentialIntegrityViolation { category_id: i64 },

    #[error("Failed to open keybind store: {}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to create store directory: {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("keybind store query failed")]
    Query(#[from] rusqlite::Error),
}

impl StoreError {
    /// True when the write was refused by a constraint and nothing changed
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::UniquenessViolation { .. } | Self::ReferentialIntegrityViolation { .. }
        )
    }
}

/// Classify an insert failure by its SQLite extended result code
pub(crate) fn classify_insert(
    err: rusqlite::Error,
    field: &'static str,
    value: &str,
    category_id: Option<i64>,
) -> StoreError {
    let code = match &err {
        rusqlite::Error::SqliteFailure(e, _) => e.extended_code,
        _ => return StoreError::Query(err),
    };

    if code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE {
        return StoreError::UniquenessViolation {
            field,
            value: value.to_string(),
        };
    }

    match category_id {
        Some(category_id) if code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
            StoreError::ReferentialIntegrityViolation { category_id }
        }
        _ => StoreError::Query(err),
    }
}
