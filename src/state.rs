//! Persisted UI state
//!
//! Stored as state.json beside the database. Only remembers which category was
//! on screen when the interface last closed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::store::{Category, DEFAULT_CATEGORY};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    #[serde(default)]
    pub last_category_id: Option<i64>,
}

impl UiState {
    /// Read state from a file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read: {}", path.as_ref().display()))?;
        serde_json::from_str(&content).context("Failed to parse state.json")
    }

    /// Read state, falling back to defaults when the file is missing or broken
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Ignoring UI state at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write state to a file
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write: {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Category to show first: the remembered one if it still exists, else
    /// "General", else the first category.
    pub fn initial_category(&self, categories: &[Category]) -> Option<i64> {
        self.last_category_id
            .filter(|id| categories.iter().any(|c| c.id == *id))
            .or_else(|| {
                categories
                    .iter()
                    .find(|c| c.name == DEFAULT_CATEGORY)
                    .map(|c| c.id)
            })
            .or_else(|| categories.first().map(|c| c.id))
    }
}
