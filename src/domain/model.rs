//! Concrete HACCP control record models.
//!
//! Two record types are tracked: storage checks of stored goods and
//! disposal records of kitchen waste. The store never reads any of their
//! fields except through the [`ControlRecord`] accessors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::ControlRecord;

/// A storage-management control record: one check of a stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageControl {
    /// Record identifier, unique within the storage store
    pub id: String,
    /// Date the check was performed
    pub date: NaiveDate,
    /// Product the check concerns
    pub product: String,
    /// Measured storage temperature in degrees Celsius
    pub temperature: f64,
    /// Whether the product met its storage requirements
    pub compliant: bool,
}

impl StorageControl {
    /// Create a new storage control record.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        product: impl Into<String>,
        temperature: f64,
        compliant: bool,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            product: product.into(),
            temperature,
            compliant,
        }
    }
}

impl ControlRecord for StorageControl {
    fn id(&self) -> &str {
        &self.id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A waste-management control record: one disposal of kitchen waste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteControl {
    /// Record identifier, unique within the waste store
    pub id: String,
    /// Date the disposal took place
    pub date: NaiveDate,
    /// Kind of waste disposed of
    pub material: String,
    /// Disposed amount in kilograms
    pub amount: f64,
    /// How the waste was disposed of
    pub method: String,
}

impl WasteControl {
    /// Create a new waste control record.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        material: impl Into<String>,
        amount: f64,
        method: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            material: material.into(),
            amount,
            method: method.into(),
        }
    }
}

impl ControlRecord for WasteControl {
    fn id(&self) -> &str {
        &self.id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}
