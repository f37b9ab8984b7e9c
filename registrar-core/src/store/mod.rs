//! Local key-value storage.
//!
//! The store holds string values under string keys, the same contract a
//! browser's `localStorage` offers. Collections serialize themselves into it
//! through [`crate::Collections`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// String-to-string storage with whole-value writes.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;

    /// Remove every key.
    fn clear(&mut self) -> Result<(), StoreError>;

    fn keys(&self) -> Vec<String>;
}

/// Bytes an entry counts against a quota: key plus value.
pub(crate) fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

/// Reject a write that would push the store past its quota.
pub(crate) fn check_quota(
    quota: Option<usize>,
    used: usize,
    replaced: usize,
    added: usize,
) -> Result<(), StoreError> {
    let Some(quota) = quota else {
        return Ok(());
    };

    let needed = used - replaced + added;
    if needed > quota {
        return Err(StoreError::QuotaExceeded { needed, quota });
    }
    Ok(())
}
