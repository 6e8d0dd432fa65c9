//! Persistent key-value contracts and the in-process backend.
//!
//! # Responsibility
//! - Define the two-operation persistence port the domain store writes
//!   through (`get` / `set` of strings by key).
//! - Provide the in-memory backend.
//!
//! # Invariants
//! - The three collection keys are fixed; each value is one JSON array.
//! - No transactions and no atomicity across keys — a crash between two
//!   `set` calls can leave the collections mutually inconsistent.

use crate::db::DbError;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite;

/// Key under which the notes collection is stored.
pub const NOTES_KEY: &str = "notes";
/// Key under which the subjects collection is stored.
pub const SUBJECTS_KEY: &str = "subjects";
/// Key under which the reminders collection is stored.
pub const REMINDERS_KEY: &str = "reminders";

pub type StorageResult<T> = Result<T, StorageError>;

/// Backend failure while reading or writing a key.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Non-SQLite backend failure, described as text.
    Backend(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Two-operation persistence port for string values keyed by name.
pub trait KvStore {
    /// Returns the stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// Volatile in-process backend.
///
/// The analog of browser local storage in the historical app; also the
/// default backend in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KvStore, MemoryKvStore};

    #[test]
    fn get_returns_none_for_absent_key() {
        let store = MemoryKvStore::new();
        assert!(store.get("notes").unwrap().is_none());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = MemoryKvStore::new();
        store.set("notes", "[]").unwrap();
        store.set("notes", "[{}]").unwrap();
        assert_eq!(store.get("notes").unwrap().as_deref(), Some("[{}]"));
    }
}
