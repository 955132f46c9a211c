//! Versioned persistence of the raw input text
//!
//! The session sees only [`PersistenceAdapter`]; the raw storage
//! behind it is any [`KeyValueStore`]. Records are written under a
//! fixed namespace with `:version` and `:data` suffixes, and a stored
//! record is honored only when its version belongs to the supported
//! major.minor family.

use crate::error::Result;
use std::collections::HashMap;

/// Namespace prefix for all persisted keys
pub const STORE_NAMESPACE: &str = "msgchunk";

/// Version written alongside every saved record
pub const STORE_VERSION: &str = "0.0.1";

/// Raw string key-value storage behind the persistence adapter
pub trait KeyValueStore {
    /// Reads one key, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes one key
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes one key; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Versioned save/load of the last raw input text
#[derive(Debug)]
pub struct PersistenceAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    /// Wraps a raw store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saves `text`, or clears the record when `text` is empty
    pub fn save(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            self.store.remove(&version_key())?;
            self.store.remove(&data_key())?;
            return Ok(());
        }

        self.store.set(&version_key(), STORE_VERSION)?;
        self.store.set(&data_key(), text)
    }

    /// Loads the stored text, if any record with a supported version
    /// exists
    ///
    /// A recognized-but-incompatible version reads as `None`, the
    /// same as no prior session.
    pub fn load(&self) -> Result<Option<String>> {
        let Some(version) = self.store.get(&version_key())? else {
            return Ok(None);
        };
        if !version_supported(&version) {
            return Ok(None);
        }
        self.store.get(&data_key())
    }

    /// Returns the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }
}

fn version_key() -> String {
    format!("{STORE_NAMESPACE}:version")
}

fn data_key() -> String {
    format!("{STORE_NAMESPACE}:data")
}

/// Accepts a stored version when its major.minor components match the
/// currently written version's
fn version_supported(stored: &str) -> bool {
    fn family(version: &str) -> (Option<&str>, Option<&str>) {
        let mut parts = version.splitn(3, '.');
        (parts.next(), parts.next())
    }
    family(stored) == family(STORE_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_round_trip() {
        let mut adapter = PersistenceAdapter::new(MemoryStore::new());
        adapter.save("some draft text").unwrap();
        assert_eq!(adapter.load().unwrap().as_deref(), Some("some draft text"));
    }

    #[test]
    fn test_empty_save_clears_the_record() {
        let mut adapter = PersistenceAdapter::new(MemoryStore::new());
        adapter.save("something").unwrap();
        adapter.save("").unwrap();
        assert_eq!(adapter.load().unwrap(), None);

        let store = adapter.into_inner();
        assert_eq!(store.get("msgchunk:version").unwrap(), None);
        assert_eq!(store.get("msgchunk:data").unwrap(), None);
    }

    #[test]
    fn test_load_with_no_record() {
        let adapter = PersistenceAdapter::new(MemoryStore::new());
        assert_eq!(adapter.load().unwrap(), None);
    }

    #[test]
    fn test_unsupported_version_reads_as_no_record() {
        let mut store = MemoryStore::new();
        store.set("msgchunk:version", "1.0.0").unwrap();
        store.set("msgchunk:data", "from the future").unwrap();

        let adapter = PersistenceAdapter::new(store);
        assert_eq!(adapter.load().unwrap(), None);
    }

    #[test]
    fn test_patch_version_drift_is_accepted() {
        let mut store = MemoryStore::new();
        store.set("msgchunk:version", "0.0.9").unwrap();
        store.set("msgchunk:data", "older patch").unwrap();

        let adapter = PersistenceAdapter::new(store);
        assert_eq!(adapter.load().unwrap().as_deref(), Some("older patch"));
    }

    #[test]
    fn test_minor_version_drift_is_rejected() {
        let mut store = MemoryStore::new();
        store.set("msgchunk:version", "0.1.0").unwrap();
        store.set("msgchunk:data", "newer minor").unwrap();

        let adapter = PersistenceAdapter::new(store);
        assert_eq!(adapter.load().unwrap(), None);
    }

    #[test]
    fn test_keys_are_namespaced() {
        let mut adapter = PersistenceAdapter::new(MemoryStore::new());
        adapter.save("text").unwrap();

        let store = adapter.into_inner();
        assert_eq!(store.get("msgchunk:version").unwrap().as_deref(), Some("0.0.1"));
        assert_eq!(store.get("msgchunk:data").unwrap().as_deref(), Some("text"));
    }
}
