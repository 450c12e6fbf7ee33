//! v001 -- Initial schema creation.
//!
//! Creates the `kv_store` table holding every persisted client slot.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Key-value store
-- ----------------------------------------------------------------
-- Persisted slots: accessToken, refreshToken, onboardingComplete,
-- pushToken, pushTokenRegistered.
CREATE TABLE IF NOT EXISTS kv_store (
    key        TEXT PRIMARY KEY NOT NULL,
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL                 -- ISO-8601 / RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
