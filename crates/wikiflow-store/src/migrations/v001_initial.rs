//! v001 -- Initial schema creation.
//!
//! Creates the single `kv` table.  Collections are stored as whole JSON
//! values under fixed keys, so the schema never grows a table per entity;
//! the JSON payloads themselves carry no version field.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key  TEXT PRIMARY KEY NOT NULL,   -- opaque collection key
    json TEXT NOT NULL                -- whole serialized value
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
