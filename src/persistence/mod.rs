//! Key-value persistence
//!
//! Stores:
//! - `MemoryStore`: in-process map (tests, headless runs)
//! - `FileStore`: JSON object file with tmp-then-rename writes (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm)

use std::collections::HashMap;

use crate::error::StoreError;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Scalar string store that outlives the process
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "42").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("42"));
        store.set("k", "43").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("43"));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::with_entry("a", "1"));
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        store.set("b", "2").unwrap();
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }
}
