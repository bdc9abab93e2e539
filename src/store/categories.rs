//! Category queries

use rusqlite::params;

use super::error::classify_insert;
use super::{Category, Store, StoreError};

impl Store {
    /// All categories in insertion order
    pub fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM category ORDER BY id")?;

        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// Insert a category. Fails with `UniquenessViolation` if the name is taken.
    pub fn create_category(&self, name: &str) -> Result<Category, StoreError> {
        let result = self
            .conn
            .execute("INSERT INTO category (name) VALUES (?1)", params![name]);

        match result {
            Ok(_) => {
                let category = Category {
                    id: self.conn.last_insert_rowid(),
                    name: name.to_string(),
                };
                tracing::debug!(id = category.id, name, "Created category");
                Ok(category)
            }
            Err(err) => {
                let err = classify_insert(err, "category", name, None);
                if err.is_rejection() {
                    tracing::warn!(name, "Rejected category: {}", err);
                }
                Err(err)
            }
        }
    }
}
