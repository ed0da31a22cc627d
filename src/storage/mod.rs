//! Storage layer for the astro-stats roster
//!
//! Durable storage is modelled as a string key-value store, the same shape
//! as a browser's `localStorage`. The roster keeps its whole state as one
//! JSON document under a single key.
//! - `models`: Data structures
//! - `file`: One JSON file per key in a directory
//! - `schema`: SQLite connection and key-value table

pub mod file;
pub mod models;
pub mod schema;

#[cfg(test)]
mod tests;

use crate::error::Result;
use std::collections::HashMap;

// Re-export the main types and storage backends for easy access
pub use file::FileStorage;
pub use models::*;
pub use schema::SqliteStorage;

/// Durable string key-value storage.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// In-process storage; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one key, as if written by an earlier run.
    pub fn with_item(key: &str, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.into());
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}
