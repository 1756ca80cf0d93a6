//! Marker store implementations.

use crate::effects::env::MarkerStore;
use crate::effects::error::StoreError;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Process-local store, handy for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryMarkerStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one marker.
    pub fn with_marker(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl MarkerStore for MemoryMarkerStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store persisted as a JSON object in a single file.
///
/// A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct FileMarkerStore {
    path: PathBuf,
}

impl FileMarkerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    key: self.path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };
        serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))
    }
}

impl MarkerStore for FileMarkerStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let write_error = |reason: String| StoreError::Write {
            key: key.to_string(),
            reason,
        };

        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&values).map_err(|e| write_error(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
        }
        fs::write(&self.path, json).map_err(|e| write_error(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("daily-swipe-{}-{name}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn memory_store_roundtrips_values() {
        let store = MemoryMarkerStore::new();
        assert_eq!(store.get("last_daily_done").unwrap(), None);

        store.set("last_daily_done", "Mon Oct 19 2026").unwrap();
        assert_eq!(
            store.get("last_daily_done").unwrap().as_deref(),
            Some("Mon Oct 19 2026")
        );
    }

    #[test]
    fn memory_store_can_be_seeded() {
        let store = MemoryMarkerStore::with_marker("k", "v");
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = FileMarkerStore::new(temp_path("missing"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let path = temp_path("persist");
        FileMarkerStore::new(&path)
            .set("last_daily_done", "Tue Oct 20 2026")
            .unwrap();
        FileMarkerStore::new(&path).set("other", "x").unwrap();

        let reopened = FileMarkerStore::new(&path);
        assert_eq!(
            reopened.get("last_daily_done").unwrap().as_deref(),
            Some("Tue Oct 20 2026")
        );
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();

        let store = FileMarkerStore::new(&path);
        assert!(matches!(store.get("k"), Err(StoreError::Corrupt(_))));
        assert!(store.set("k", "v").is_err());
        let _ = fs::remove_file(path);
    }
}
