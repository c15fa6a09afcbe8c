use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::KeyValueStore;

/// In-memory, HashMap-based key-value store.
///
/// Intended for tests and embedding. An optional byte quota (key plus value
/// lengths, summed over all entries) makes oversized writes fail the way a
/// browser storage area does when it fills up.
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty store with no quota.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: None,
        }
    }

    /// Create an empty store that rejects writes beyond `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: Some(limit),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total bytes across all keys and values.
    pub fn total_bytes(&self) -> usize {
        self.entries
            .read()
            .map(|m| m.iter().map(|(k, v)| k.len() + v.len()).sum())
            .unwrap_or(0)
    }

    /// Remove every key.
    pub fn clear(&self) {
        if let Ok(mut map) = self.entries.write() {
            map.clear();
        }
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let map = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        if let Some(limit) = self.quota {
            let current: usize = map
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = current + key.len() + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded { needed, limit });
            }
        }
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let mut map = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.remove(key).is_some())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let map = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        let map = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.contains_key(key))
    }
}

impl std::fmt::Debug for InMemoryKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryKeyValueStore")
            .field("key_count", &self.len())
            .field("quota", &self.quota)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let store = InMemoryKeyValueStore::new();
        store.set("events", "[]").unwrap();
        assert_eq!(store.get("events").unwrap().as_deref(), Some("[]"));
        assert!(store.get("speakers").unwrap().is_none());
    }

    #[test]
    fn set_overwrites() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "a").unwrap();
        store.set("k", "b").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("b"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "v").unwrap();
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
        assert!(!store.contains("k").unwrap());
    }

    #[test]
    fn keys_are_sorted() {
        let store = InMemoryKeyValueStore::new();
        store.set("topics", "[]").unwrap();
        store.set("agenda", "[]").unwrap();
        store.set("events", "[]").unwrap();
        assert_eq!(store.keys().unwrap(), ["agenda", "events", "topics"]);
    }

    #[test]
    fn quota_rejects_oversized_writes() {
        let store = InMemoryKeyValueStore::with_quota(10);
        store.set("k", "12345").unwrap(); // 6 bytes
        let err = store.set("j", "123456").unwrap_err(); // 6 more
        assert!(matches!(err, StoreError::QuotaExceeded { needed: 13, limit: 10 }));
        assert!(store.get("j").unwrap().is_none());
    }

    #[test]
    fn quota_counts_replacement_not_sum() {
        let store = InMemoryKeyValueStore::with_quota(10);
        store.set("k", "12345678").unwrap();
        // Replacing the same key only needs the new value's size.
        store.set("k", "87654321").unwrap();
        assert_eq!(store.total_bytes(), 9);
    }

    #[test]
    fn clear_removes_all() {
        let store = InMemoryKeyValueStore::default();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryKeyValueStore::new();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryKeyValueStore"));
        assert!(debug.contains("key_count"));
    }
}
