//! Durable key-value storage seam for the session flag
//!
//! The browser build plugs `localStorage` in behind [`SessionStorage`];
//! tests and the native server use [`MemoryStorage`].

use crate::error::StorageError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// String key-value store with `localStorage` semantics
pub trait SessionStorage {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage, cheap to clone (clones share the same map)
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with the given entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(map)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip_and_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("isLoggedIn").unwrap(), None);

        storage.set("isLoggedIn", "true").unwrap();
        assert_eq!(storage.get("isLoggedIn").unwrap().as_deref(), Some("true"));

        storage.remove("isLoggedIn").unwrap();
        assert!(storage.is_empty());

        // Removing twice is fine
        storage.remove("isLoggedIn").unwrap();
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::with_entries([("a", "1")]);
        let clone = storage.clone();
        clone.set("b", "2").unwrap();

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
    }
}
