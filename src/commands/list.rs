//! List commands - Show keybinds and categories as tables

use anyhow::{bail, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::app::UNCATEGORIZED_LABEL;
use crate::store::{Category, Store, UNCATEGORIZED};
use crate::view_model::ViewModel;

/// Options for the list command
pub struct ListOptions {
    /// Only show this category (by name)
    pub category: Option<String>,
}

/// Execute the list command and return formatted output
pub fn execute(store: &Store, options: ListOptions) -> Result<String> {
    let view = ViewModel::load(store)?;

    let sections: Vec<(i64, &str)> = match options.category.as_deref() {
        Some(name) => match view.category_named(name) {
            Some(category) => vec![(category.id, category.name.as_str())],
            None => bail!("Unknown category: {}", name),
        },
        None => {
            let mut all: Vec<(i64, &str)> = view
                .categories()
                .iter()
                .map(|c| (c.id, c.name.as_str()))
                .collect();
            if view.has_uncategorized() {
                all.push((UNCATEGORIZED, UNCATEGORIZED_LABEL));
            }
            all
        }
    };

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Category"),
        Cell::new("Keys"),
        Cell::new("Description"),
    ]);

    let mut count = 0;
    for (id, name) in sections {
        for keybind in view.keybinds_for(id) {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(&keybind.keys),
                Cell::new(&keybind.description),
            ]);
            count += 1;
        }
    }

    let mut output = table.to_string();
    output.push_str(&format!("\n\n{} keybinds found", count));
    Ok(output)
}

/// Execute the categories command and return formatted output
pub fn categories(store: &Store) -> Result<String> {
    let view = ViewModel::load(store)?;

    let mut table = new_table();
    table.set_header(vec![Cell::new("ID"), Cell::new("Name"), Cell::new("Keybinds")]);

    for Category { id, name } in view.categories() {
        table.add_row(vec![
            Cell::new(id),
            Cell::new(name),
            Cell::new(view.keybinds_for(*id).len()),
        ]);
    }

    let mut output = table.to_string();
    if view.has_uncategorized() {
        output.push_str(&format!(
            "\n\n{} keybinds have no category",
            view.keybinds_for(UNCATEGORIZED).len()
        ));
    }
    Ok(output)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}
