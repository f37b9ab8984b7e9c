use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError, check_quota, entry_size};

const STORE_FILE: &str = "store.json";
const BACKUP_FILE: &str = "store.json.bak";

/// Key-value store persisted as one JSON object in the data directory.
///
/// Every write rewrites the whole file. Two processes writing the same store
/// race, and the last one to rename its file wins.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl FileStore {
    /// Open (or create) the store inside `data_dir`.
    ///
    /// A store file that cannot be parsed is moved aside to `store.json.bak`
    /// and the store starts out empty.
    pub fn open(data_dir: &Path, quota: Option<usize>) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(STORE_FILE);

        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                match serde_json::from_str(&content) {
                    Ok(entries) => entries,
                    Err(e) => {
                        let backup = data_dir.join(BACKUP_FILE);
                        tracing::warn!(
                            path = %path.display(),
                            backup = %backup.display(),
                            error = %e,
                            "store file is unreadable, starting empty"
                        );
                        std::fs::rename(&path, &backup)?;
                        BTreeMap::new()
                    }
                }
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "opened store");

        Ok(FileStore {
            path,
            entries,
            quota,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn used(&self) -> usize {
        self.entries.iter().map(|(k, v)| entry_size(k, v)).sum()
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    /// Apply `change` to a copy of the entries and keep it only once it is on disk.
    fn commit<F>(&mut self, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut next = self.entries.clone();
        change(&mut next);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
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

        self.commit(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        self.commit(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.commit(|entries| entries.clear())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
