//! Keybind queries

use rusqlite::params;

use super::error::classify_insert;
use super::{Keybind, KeybindGroups, Store, StoreError, UNCATEGORIZED};

impl Store {
    /// Every keybind grouped by category id
    ///
    /// Keybinds whose category is NULL or no longer exists land in the
    /// [`UNCATEGORIZED`] bucket and carry that id themselves.
    pub fn list_keybinds_grouped(&self) -> Result<KeybindGroups, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT k.id, k.keys, k.description, COALESCE(c.id, ?1)
             FROM keybind k
             LEFT JOIN category c ON c.id = k.category_id
             ORDER BY k.id",
        )?;

        let rows = stmt.query_map(params![UNCATEGORIZED], |row| {
            Ok(Keybind {
                id: row.get(0)?,
                keys: row.get(1)?,
                description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                category_id: row.get(3)?,
            })
        })?;

        let mut groups = KeybindGroups::new();
        for keybind in rows {
            let keybind = keybind?;
            groups.entry(keybind.category_id).or_default().push(keybind);
        }

        Ok(groups)
    }

    /// Insert a keybind
    ///
    /// Fails with `UniquenessViolation` if `keys` is taken and with
    /// `ReferentialIntegrityViolation` if `category_id` names no category.
    pub fn create_keybind(
        &self,
        keys: &str,
        description: &str,
        category_id: i64,
    ) -> Result<Keybind, StoreError> {
        let result = self.conn.execute(
            "INSERT INTO keybind (keys, description, category_id) VALUES (?1, ?2, ?3)",
            params![keys, description, category_id],
        );

        match result {
            Ok(_) => {
                let keybind = Keybind {
                    id: self.conn.last_insert_rowid(),
                    keys: keys.to_string(),
                    description: description.to_string(),
                    category_id,
                };
                tracing::debug!(id = keybind.id, keys, category_id, "Created keybind");
                Ok(keybind)
            }
            Err(err) => {
                let err = classify_insert(err, "keys", keys, Some(category_id));
                if err.is_rejection() {
                    tracing::warn!(keys, category_id, "Rejected keybind: {}", err);
                }
                Err(err)
            }
        }
    }
}
