//! In-process store for tests and non-browser hosts.

use std::collections::HashMap;

use super::{KeyValueStore, StoreError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// When set, every write fails with this message.
    fail_writes: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Make subsequent writes fail, as a full browser quota would.
    #[must_use]
    pub fn failing_writes(mut self, reason: &str) -> Self {
        self.fail_writes = Some(reason.to_owned());
        self
    }

    /// Copy of everything currently stored.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.clone()
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(reason) = &self.fail_writes {
            return Err(StoreError::Write(reason.clone()));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
