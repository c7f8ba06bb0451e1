//! Persistence for the calculator history.
//!
//! A [`KeyValueStore`] is the raw storage medium. [`HistoryStore`] keeps the
//! history under a single key as a JSON array of strings, newest first, and
//! never lets a storage failure reach the calculator: failures are logged
//! and treated as an empty or unchanged history.

use crate::core::{History, HistoryEntry};
use tracing::{debug, info, warn};

pub mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key the history is stored under unless configured otherwise.
pub const DEFAULT_HISTORY_KEY: &str = "calc.history";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Best-effort, capped history persisted in a key-value store.
///
/// # Example
///
/// ```rust
/// use calcpad::store::{HistoryStore, MemoryStore};
///
/// let mut store = HistoryStore::new(MemoryStore::new());
/// store.save("1 + 2 = 3".into());
///
/// assert_eq!(store.load().to_strings(), vec!["1 + 2 = 3"]);
/// ```
#[derive(Debug)]
pub struct HistoryStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueStore> HistoryStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_HISTORY_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Stored history, newest first. Empty if nothing is stored or the
    /// stored data cannot be read.
    pub fn load(&self) -> History {
        match self.try_load() {
            Ok(history) => history,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to load history, using empty history");
                History::new()
            }
        }
    }

    /// Prepend `entry` and persist, keeping the most recent entries only.
    ///
    /// Leaves the stored history unchanged if it cannot be read or written.
    pub fn save(&mut self, entry: HistoryEntry) {
        if let Err(e) = self.try_save(entry) {
            warn!(key = %self.key, error = %e, "failed to save history entry");
        }
    }

    /// Remove every stored entry.
    pub fn clear(&mut self) {
        match self.backend.remove(&self.key) {
            Ok(()) => info!(key = %self.key, "history cleared"),
            Err(e) => warn!(key = %self.key, error = %e, "failed to clear history"),
        }
    }

    fn try_load(&self) -> Result<History, StoreError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(History::new());
        };
        let items: Vec<String> = serde_json::from_str(&raw)
            .map_err(|e| StoreError::DeserializationFailed(e.to_string()))?;
        Ok(History::from_entries(items))
    }

    fn try_save(&mut self, entry: HistoryEntry) -> Result<(), StoreError> {
        let history = self.try_load()?.record(entry);
        let json = serde_json::to_string(&history)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;
        self.backend.set(&self.key, &json)?;
        debug!(key = %self.key, entries = history.len(), "history saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HISTORY_LIMIT;

    /// Backend whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    #[test]
    fn empty_store_loads_empty_history() {
        let store = HistoryStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
        assert_eq!(store.key(), DEFAULT_HISTORY_KEY);
    }

    #[test]
    fn save_prepends_newest() {
        let mut store = HistoryStore::new(MemoryStore::new());
        store.save("a".into());
        store.save("b".into());
        assert_eq!(store.load().to_strings(), vec!["b", "a"]);
    }

    #[test]
    fn save_persists_json_array() {
        let mut store = HistoryStore::with_key(MemoryStore::new(), "k");
        store.save("1 + 2 = 3".into());
        assert_eq!(
            store.backend().get("k").unwrap().as_deref(),
            Some(r#"["1 + 2 = 3"]"#)
        );
    }

    #[test]
    fn twenty_five_saves_keep_the_latest_twenty() {
        let mut store = HistoryStore::new(MemoryStore::new());
        for i in 0..25 {
            store.save(format!("entry {i}").into());
        }

        let history = store.load();
        assert_eq!(history.len(), HISTORY_LIMIT);
        let expected: Vec<String> = (5..25).rev().map(|i| format!("entry {i}")).collect();
        assert_eq!(history.to_strings(), expected);
    }

    #[test]
    fn malformed_data_loads_as_empty() {
        let mut backend = MemoryStore::new();
        backend.set(DEFAULT_HISTORY_KEY, "{not json").unwrap();
        let store = HistoryStore::new(backend);
        assert!(store.load().is_empty());
    }

    #[test]
    fn non_string_array_loads_as_empty() {
        let mut backend = MemoryStore::new();
        backend.set(DEFAULT_HISTORY_KEY, r#"{"entries": 3}"#).unwrap();
        let store = HistoryStore::new(backend);
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_over_malformed_data_is_a_no_op() {
        let mut backend = MemoryStore::new();
        backend.set(DEFAULT_HISTORY_KEY, "garbage").unwrap();
        let mut store = HistoryStore::new(backend);

        store.save("1 + 1 = 2".into());

        assert_eq!(
            store.backend().get(DEFAULT_HISTORY_KEY).unwrap().as_deref(),
            Some("garbage")
        );
    }

    #[test]
    fn oversized_stored_list_is_truncated_on_load() {
        let stored: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        let mut backend = MemoryStore::new();
        backend
            .set(DEFAULT_HISTORY_KEY, &serde_json::to_string(&stored).unwrap())
            .unwrap();

        let store = HistoryStore::new(backend);
        assert_eq!(store.load().len(), HISTORY_LIMIT);
    }

    #[test]
    fn clear_removes_entries() {
        let mut store = HistoryStore::new(MemoryStore::new());
        store.save("a".into());
        store.clear();
        assert!(store.load().is_empty());
        assert!(store.backend().is_empty());
    }

    #[test]
    fn broken_backend_never_fails() {
        let mut store = HistoryStore::new(BrokenStore);
        store.save("a".into());
        store.clear();
        assert!(store.load().is_empty());
    }

    #[test]
    fn boxed_backend_works() {
        let backend: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        let mut store = HistoryStore::new(backend);
        store.save("x".into());
        assert_eq!(store.load().len(), 1);
    }
}
