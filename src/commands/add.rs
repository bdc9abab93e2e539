//! Add commands - Create categories and keybinds from the command line

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::store::{Store, DEFAULT_CATEGORY};
use crate::view_model::ViewModel;

/// Create a category and return a confirmation line
pub fn category(store: &Store, name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Category name must not be empty");
    }

    let category = store
        .create_category(name)
        .with_context(|| format!("Failed to add category '{}'", name))?;

    Ok(format!(
        "{} category '{}' (id {})",
        "Added".green(),
        category.name,
        category.id
    ))
}

/// Create a keybind in the named category (default "General")
pub fn keybind(
    store: &Store,
    keys: &str,
    description: &str,
    category: Option<&str>,
) -> Result<String> {
    let keys = keys.trim();
    if keys.is_empty() {
        anyhow::bail!("Keys must not be empty");
    }

    let category_name = category.unwrap_or(DEFAULT_CATEGORY);
    let view = ViewModel::load(store)?;
    let category = view
        .category_named(category_name)
        .with_context(|| format!("Unknown category: {}", category_name))?;

    let keybind = store
        .create_keybind(keys, description, category.id)
        .with_context(|| format!("Failed to add keybind '{}'", keys))?;

    Ok(format!(
        "{} '{}' to {}",
        "Added".green(),
        keybind.keys,
        category.name.bold()
    ))
}
