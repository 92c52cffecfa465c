//! Record store contract.
//!
//! The trait is defined in the domain layer and implemented by the
//! infrastructure layer, so upstream request handlers depend on the
//! contract rather than on a concrete store (dependency inversion).

use chrono::NaiveDate;

use super::{error::StoreError, record::ControlRecord};

/// The store contract for one entity type.
///
/// A store holds an insertion-ordered collection of records with at most
/// one record per distinct id. One instance is constructed per entity
/// type by the composition root and shared as `Arc<dyn RecordStore<R>>`
/// between request handlers; implementations must therefore be safe to
/// call from concurrent callers.
pub trait RecordStore<R: ControlRecord>: Send + Sync {
    /// Append `record` to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if a record with the same id
    /// is already present; the store is left unchanged.
    fn add(&self, record: R) -> Result<(), StoreError>;

    /// Return the unique record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] naming the id if no record
    /// matches.
    fn get_by_id(&self, id: &str) -> Result<R, StoreError>;

    /// Return the first record, in insertion order, with the given date.
    ///
    /// Dates are not unique; when several records share one, the earliest
    /// inserted wins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] naming the date if no record
    /// matches.
    fn get_by_date(&self, date: NaiveDate) -> Result<R, StoreError>;

    /// Remove every record with the given id (at most one, given the
    /// unique-id invariant).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] naming the id if no record
    /// matches; the store is left unchanged.
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}
