//! Record collections on top of a key-value store.
//!
//! Each collection is stored as a JSON array under its own key and is always
//! read and written whole.

use crate::record::{Contact, Event, Location, Record, RecordId, RecordKind};
use crate::store::{KeyValueStore, StoreError};

pub struct Collections<S> {
    store: S,
}

impl<S: KeyValueStore> Collections<S> {
    pub fn new(store: S) -> Self {
        Collections { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Make sure every collection key holds a sequence.
    ///
    /// Missing or blank keys are seeded with an empty array; existing
    /// collections are never overwritten. Records stored without an id get
    /// one here, so ids stay the same from one load to the next.
    pub fn init(&mut self) -> Result<(), StoreError> {
        self.init_collection::<Event>()?;
        self.init_collection::<Contact>()?;
        self.init_collection::<Location>()?;
        Ok(())
    }

    fn init_collection<R: Record>(&mut self) -> Result<(), StoreError> {
        let key = R::KIND.storage_key();

        let raw = match self.store.get_item(key) {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                tracing::debug!(collection = key, "seeding empty collection");
                return self.store.set_item(key, "[]");
            }
        };

        // Malformed content is left alone; `load` reads it as empty.
        let Ok(mut records) = serde_json::from_str::<Vec<R>>(&raw) else {
            tracing::warn!(collection = key, "stored collection is not valid, reading it as empty");
            return Ok(());
        };

        let mut assigned = 0;
        for record in records.iter_mut().filter(|r| r.uid().is_nil()) {
            record.set_uid(RecordId::new());
            assigned += 1;
        }

        if assigned > 0 {
            tracing::debug!(collection = key, assigned, "assigned ids to stored records");
            self.save(&records)?;
        }
        Ok(())
    }

    /// The stored sequence, or an empty one if it is missing or unreadable.
    pub fn load<R: Record>(&self) -> Vec<R> {
        let key = R::KIND.storage_key();

        let Some(raw) = self.store.get_item(key) else {
            return Vec::new();
        };
        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(collection = key, error = %e, "could not parse stored collection");
                Vec::new()
            }
        }
    }

    /// Replace the stored sequence with `records`.
    pub fn save<R: Record>(&mut self, records: &[R]) -> Result<(), StoreError> {
        let key = R::KIND.storage_key();
        let content =
            serde_json::to_string(records).map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.store.set_item(key, &content)?;
        tracing::debug!(collection = key, count = records.len(), "saved collection");
        Ok(())
    }

    /// Append `record` and persist. Returns the new sequence.
    pub fn append<R: Record>(&mut self, record: R) -> Result<Vec<R>, StoreError> {
        let mut records = self.load::<R>();
        records.push(record);
        self.save(&records)?;
        Ok(records)
    }

    /// Remove the record with `uid`, if present, and persist.
    pub fn remove<R: Record>(&mut self, uid: RecordId) -> Result<Option<R>, StoreError> {
        let records = self.load::<R>();
        match records.iter().position(|r| r.uid() == uid) {
            Some(index) => self.remove_from(records, index),
            None => Ok(None),
        }
    }

    /// Remove the record at `index`, if in range, and persist.
    pub fn remove_at<R: Record>(&mut self, index: usize) -> Result<Option<R>, StoreError> {
        let records = self.load::<R>();
        if index >= records.len() {
            return Ok(None);
        }
        self.remove_from(records, index)
    }

    fn remove_from<R: Record>(&mut self, mut records: Vec<R>, index: usize) -> Result<Option<R>, StoreError> {
        let removed = records.remove(index);
        self.save(&records)?;
        Ok(Some(removed))
    }

    /// Number of records stored under `kind`.
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Events => self.load::<Event>().len(),
            RecordKind::Contacts => self.load::<Contact>().len(),
            RecordKind::Locations => self.load::<Location>().len(),
        }
    }

    /// Wipe the whole store.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.store.clear()?;
        tracing::debug!("cleared store");
        Ok(())
    }
}
