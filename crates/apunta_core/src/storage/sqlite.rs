//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Persist key-value entries durably in the `kv_entries` table.
//!
//! # Invariants
//! - The wrapped connection is always migrated/bootstrapped (constructors
//!   go through `db::open_db`).
//! - `set` is an upsert; the row's `updated_at` mirrors the write instant.

use crate::db::{open_db, open_db_in_memory};
use crate::storage::{KvStore, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Durable backend over a single-table SQLite database.
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Opens (creating if needed) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a private in-memory database. Contents vanish on drop.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
