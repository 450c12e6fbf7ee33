//! Generic key-value operations on the `kv_store` table.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Read a raw value.  `None` when the key was never set.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn()
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Insert or overwrite a value.
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Delete a value.  Returns `true` if a row was deleted.
    pub fn delete_value(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(affected > 0)
    }

    /// Read a boolean flag.  Missing keys read as `false`.
    pub fn get_flag(&self, key: &str) -> Result<bool> {
        Ok(matches!(self.get_value(key)?.as_deref(), Some("true")))
    }

    /// Write a boolean flag.
    pub fn set_flag(&self, key: &str, value: bool) -> Result<()> {
        self.set_value(key, if value { "true" } else { "false" })
    }
}
