//! File-backed key-value store
//!
//! Backs the session persistence adapter with a small JSON object on
//! disk, one entry per key. Every write persists immediately; the
//! store is read once when opened.

use msgchunk_session::{KeyValueStore, Result as SessionResult, SessionError};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// JSON-file-backed implementation of [`KeyValueStore`]
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, starting empty when the file does
    /// not exist yet
    pub fn open(path: PathBuf) -> SessionResult<Self> {
        let entries = if path.is_file() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| SessionError::Store(e.to_string()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Default store location under the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("msgchunk").join("store.json"))
    }

    /// Where this store persists to
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn persist(&self) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| SessionError::Store(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SessionResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> SessionResult<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(path.clone()).unwrap();
        store.set("msgchunk:data", "draft").unwrap();
        drop(store);

        let reopened = FileStore::open(path).unwrap();
        assert_eq!(
            reopened.get("msgchunk:data").unwrap().as_deref(),
            Some("draft")
        );
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(path.clone()).unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        drop(store);

        let reopened = FileStore::open(path).unwrap();
        assert_eq!(reopened.get("k").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        assert!(FileStore::open(path).is_err());
    }
}
