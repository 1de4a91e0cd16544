//! Browser LocalStorage store

use web_sys::Storage;

use super::KeyValueStore;
use crate::error::StoreError;

/// `window.localStorage`, or nothing if the browser refuses access
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, scores will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("window.localStorage".to_string()))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }
}
