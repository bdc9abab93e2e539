//! In-memory projection of the store consumed by the interface
//!
//! Loaded once from a [`Store`] snapshot and then updated incrementally.
//! `on_category_created` and `on_keybind_created` must only be called with
//! records the store has just confirmed; the view model never re-queries.

use crate::store::{Category, Keybind, KeybindGroups, Store, StoreError, UNCATEGORIZED};

#[derive(Debug, Default, Clone)]
pub struct ViewModel {
    categories: Vec<Category>,
    keybinds_by_category: KeybindGroups,
}

impl ViewModel {
    pub fn new(categories: Vec<Category>, keybinds_by_category: KeybindGroups) -> Self {
        Self {
            categories,
            keybinds_by_category,
        }
    }

    /// Take a full snapshot of the store
    pub fn load(store: &Store) -> Result<Self, StoreError> {
        let categories = store.list_categories()?;
        let keybinds_by_category = store.list_keybinds_grouped()?;

        tracing::debug!(
            categories = categories.len(),
            groups = keybinds_by_category.len(),
            "Loaded view model"
        );

        Ok(Self::new(categories, keybinds_by_category))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_named(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn on_category_created(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn on_keybind_created(&mut self, keybind: Keybind) {
        self.keybinds_by_category
            .entry(keybind.category_id)
            .or_default()
            .push(keybind);
    }

    /// Cached keybinds for a category id, empty if none are recorded
    pub fn keybinds_for(&self, category_id: i64) -> &[Keybind] {
        self.keybinds_by_category
            .get(&category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether any keybind sits in the sentinel bucket
    pub fn has_uncategorized(&self) -> bool {
        !self.keybinds_for(UNCATEGORIZED).is_empty()
    }

    /// Total number of cached keybinds across all buckets
    pub fn keybind_count(&self) -> usize {
        self.keybinds_by_category.values().map(Vec::len).sum()
    }
}
