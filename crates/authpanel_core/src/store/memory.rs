//! Ephemeral in-memory key-value backend.
//!
//! # Responsibility
//! - Back session state that must not survive the process/tab lifetime.
//! - Double as the test fake for both backend roles.
//!
//! # Invariants
//! - Contents are lost when the store is dropped; nothing touches disk.

use super::{KeyValueStore, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Ephemeral backend holding values for the lifetime of the store only.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    // RefCell keeps the trait surface `&self`, matching the SQLite backend.
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries. Used by tests asserting exclusivity.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
