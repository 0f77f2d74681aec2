//! Keyed blob store over SQLite.
//!
//! The [`Store`] struct owns a [`rusqlite::Connection`] and guarantees that
//! migrations are run before any other operation.  Persistence is a handful
//! of independent JSON values under fixed keys; every mutation reads a whole
//! collection, modifies it in memory and writes the whole collection back.
//! Two writers racing on the same key resolve last-write-wins, undetected.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Result, StoreError};
use crate::migrations;

/// Key holding the document collection.
pub const KEY_DOCUMENTS: &str = "documents";
/// Key holding the project collection.
pub const KEY_PROJECTS: &str = "projects";
/// Key holding the persisted current-user pointer.
pub const KEY_CURRENT_USER: &str = "current_user";

/// Wrapper around a [`rusqlite::Connection`].
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the default application store.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/wikiflow/wikiflow.db`
    /// - macOS:   `~/Library/Application Support/com.wikiflow.wikiflow/wikiflow.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\wikiflow\wikiflow\data\wikiflow.db`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("com", "wikiflow", "wikiflow").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("wikiflow.db");

        tracing::info!(path = %db_path.display(), "opening store");

        Self::open_at(&db_path)
    }

    /// Open (or create) a store at an explicit path.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Recommended SQLite settings.
        conn.pragma_update(None, "journal_mode", "WAL")?;

        // Run schema migrations.
        migrations::run_migrations(&conn)?;

        Ok(Self { conn })
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    ///
    /// Callers should prefer the typed repository helpers, but direct access
    /// is occasionally needed for ad-hoc queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Return the filesystem path of the open store (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }

    /// Read the raw JSON stored under `key`, if any.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT json FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(StoreError::Sqlite)
    }

    /// Replace the value stored under `key` wholesale.
    pub fn put_raw(&self, key: &str, json: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, json) VALUES (?1, ?2)",
            params![key, json],
        )?;
        Ok(())
    }

    /// Load and deserialize the value stored under `key`.
    ///
    /// `Ok(None)` means the key has never been written; callers bootstrap
    /// from seed data in that case.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` and store it under `key`, replacing any prior value.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.put_raw(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        let store = Store::open_at(&path).expect("should open");
        assert!(store.path().is_some());
    }

    #[test]
    fn unwritten_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(&dir.path().join("test.db")).unwrap();

        assert!(store.get_raw("nothing").unwrap().is_none());
        assert!(store.load::<Vec<String>>("nothing").unwrap().is_none());
    }

    #[test]
    fn put_replaces_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(&dir.path().join("test.db")).unwrap();

        store.save("k", &vec!["a".to_string(), "b".to_string()]).unwrap();
        store.save("k", &vec!["c".to_string()]).unwrap();

        let loaded: Vec<String> = store.load("k").unwrap().unwrap();
        assert_eq!(loaded, vec!["c".to_string()]);
    }
}
