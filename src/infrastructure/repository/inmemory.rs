//! In-memory `RecordStore` implementation.
//!
//! Keeps records in an insertion-ordered `Vec` behind a mutex. The
//! composition root constructs one instance per entity type and shares it
//! as `Arc<dyn RecordStore<R>>` between request handlers. Every operation
//! holds the lock for its full critical section, so the uniqueness check
//! and the mutation it guards are atomic.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{ControlRecord, RecordStore, StoreError};

/// Generic in-memory record store, one instance per entity type.
pub struct InMemoryRecordStore<R> {
    records: Mutex<Vec<R>>,
}

impl<R> InMemoryRecordStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // No operation leaves the Vec half-mutated, so the data is still
    // consistent after a panic in another holder; recover it instead of
    // failing every later call on a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, Vec<R>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RecordStore<R> for InMemoryRecordStore<R>
where
    R: ControlRecord + Clone + Send,
{
    fn add(&self, record: R) -> Result<(), StoreError> {
        let mut records = self.lock();
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::DuplicateKey {
                id: record.id().to_string(),
            });
        }
        debug!(id = record.id(), total = records.len() + 1, "record added");
        records.push(record);
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> Result<R, StoreError> {
        self.lock()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::id_not_found(id))
    }

    fn get_by_date(&self, date: NaiveDate) -> Result<R, StoreError> {
        // Dates are not unique; the earliest inserted match wins.
        self.lock()
            .iter()
            .find(|r| r.date() == date)
            .cloned()
            .ok_or(StoreError::date_not_found(date))
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.lock();
        if !records.iter().any(|r| r.id() == id) {
            return Err(StoreError::id_not_found(id));
        }
        records.retain(|r| r.id() != id);
        debug!(id, remaining = records.len(), "record deleted");
        Ok(())
    }
}
