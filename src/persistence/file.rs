//! JSON file store for native builds

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::StoreError;

/// All keys live in one JSON object file.
///
/// Writes go to `<file>.tmp` and are renamed over the target, so an
/// interrupted write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(json) if json.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, serde_json::to_string_pretty(&entries)?)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Wrote {} to {}", key, self.path.display());
        Ok(())
    }
}
