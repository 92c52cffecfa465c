//! In-memory record store for a HACCP food-safety tracking application.
//!
//! The tracked entities are control records — storage checks and waste
//! disposals — each carrying a unique id and a control date. One generic
//! store type, [`InMemoryRecordStore`], serves both entity types: the
//! composition root constructs one instance per type and hands it to
//! request handlers behind the [`RecordStore`] trait.
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use haccp_store::domain::{RecordStore, StorageControl};
//! use haccp_store::infrastructure::repository::InMemoryRecordStore;
//!
//! let store: Arc<dyn RecordStore<StorageControl>> =
//!     Arc::new(InMemoryRecordStore::new());
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! store
//!     .add(StorageControl::new("c-1", date, "milk", 4.0, true))
//!     .unwrap();
//!
//! assert_eq!(store.get_by_id("c-1").unwrap().product, "milk");
//! assert_eq!(store.get_by_date(date).unwrap().id, "c-1");
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{ControlRecord, LookupKey, RecordStore, StoreError};
pub use infrastructure::repository::InMemoryRecordStore;
