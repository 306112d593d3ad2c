//! # Record Store
//!
//! The in-memory authoritative collection of transaction records for the
//! process lifetime. Records live in insertion order behind a single
//! `RwLock`; ids are assigned by the store and never supplied by clients.

mod errors;
mod record;

pub use errors::{StoreError, StoreResult};
pub use record::{Fields, Record};

use std::sync::RwLock;

/// Ordered, mutable collection of transaction records.
///
/// All five operations run against the shared collection under the interior
/// lock: reads take the read guard, mutations the write guard, each held for
/// the duration of the operation.
pub struct TransactionStore {
    records: RwLock<Vec<Record>>,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a store seeded with an ordered sequence of records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Full ordered sequence of records.
    pub fn list(&self) -> StoreResult<Vec<Record>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.clone())
    }

    /// Number of records currently held.
    pub fn len(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// First record (insertion order) with a matching id.
    pub fn get(&self, id: u64) -> StoreResult<Record> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new record with id = max(existing ids) + 1, or 1 when the
    /// store is empty. Any `id` in the incoming fields is discarded.
    pub fn create(&self, fields: Fields) -> StoreResult<Record> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let next_id = records.iter().map(|record| record.id).max().unwrap_or(0) + 1;
        let record = Record::new(next_id, fields);
        records.push(record.clone());
        Ok(record)
    }

    /// Shallow-merge the incoming fields into the first record with a
    /// matching id, keeping its position and original id.
    pub fn update(&self, id: u64, fields: Fields) -> StoreResult<Record> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.merge(fields);
        Ok(record.clone())
    }

    /// Remove the first record with a matching id and return its full
    /// pre-deletion contents.
    pub fn delete(&self, id: u64) -> StoreResult<Record> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(records.remove(index))
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}
