//! Domain layer for the HACCP record store.
//!
//! This module contains the business types and contracts that are
//! independent of infrastructure concerns.

pub mod error;
pub mod factory;
pub mod model;
pub mod record;
pub mod repository;

pub use error::{LookupKey, StoreError};
pub use factory::RecordIdFactory;
pub use model::{StorageControl, WasteControl};
pub use record::ControlRecord;
pub use repository::RecordStore;
