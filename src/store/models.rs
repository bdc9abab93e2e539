//! Records held by the store

use std::collections::HashMap;

/// Bucket key for keybinds whose category reference is absent or unresolvable
pub const UNCATEGORIZED: i64 = -1;

/// Name of the category every store starts with
pub const DEFAULT_CATEGORY: &str = "General";

/// A named grouping of keybinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A key combination with its description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub id: i64,
    pub keys: String,
    pub description: String,
    /// Owning category id, or [`UNCATEGORIZED`]
    pub category_id: i64,
}

/// Keybinds grouped by category id, each group in insertion order
pub type KeybindGroups = HashMap<i64, Vec<Keybind>>;
