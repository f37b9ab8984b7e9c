use std::collections::BTreeMap;

use super::{KeyValueStore, StoreError, check_quota, entry_size};

/// In-memory store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses writes once `quota` bytes are in use.
    pub fn with_quota(quota: usize) -> Self {
        MemoryStore {
            entries: BTreeMap::new(),
            quota: Some(quota),
        }
    }

    fn used(&self) -> usize {
        self.entries.iter().map(|(k, v)| entry_size(k, v)).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let replaced = self
            .entries
            .get(key)
            .map(|old| entry_size(key, old))
            .unwrap_or(0);
        check_quota(self.quota, self.used(), replaced, entry_size(key, value))?;

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("eventos"), None);

        store.set_item("eventos", "[]").unwrap();
        assert_eq!(store.get_item("eventos").as_deref(), Some("[]"));

        store.remove_item("eventos").unwrap();
        assert_eq!(store.get_item("eventos"), None);
    }

    #[test]
    fn test_quota_counts_keys_and_values() {
        let mut store = MemoryStore::with_quota(10);
        store.set_item("abc", "1234567").unwrap();

        let err = store.set_item("d", "e").unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { needed: 12, quota: 10 }));
        assert_eq!(store.get_item("d"), None);
    }

    #[test]
    fn test_quota_allows_replacing_within_limit() {
        let mut store = MemoryStore::with_quota(10);
        store.set_item("abc", "1234567").unwrap();
        store.set_item("abc", "7654321").unwrap();
        assert_eq!(store.get_item("abc").as_deref(), Some("7654321"));
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut store = MemoryStore::new();
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();
        store.clear().unwrap();
        assert!(store.keys().is_empty());
    }
}
