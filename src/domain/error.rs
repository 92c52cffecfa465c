//! Domain layer error definitions.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Key a failed lookup or delete was searching for.
///
/// Lets [`StoreError::NotFound`] name exactly what was missing: an id for
/// `get_by_id`/`delete`, a date for `get_by_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// A record identifier
    Id(String),
    /// A control date
    Date(NaiveDate),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "id ({id})"),
            LookupKey::Date(date) => write!(f, "date ({date})"),
        }
    }
}

/// Errors returned by record store operations.
///
/// Both kinds are expected, recoverable outcomes of normal operation; the
/// store returns them to the caller and never logs or swallows them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `add` would violate the unique-id invariant
    #[error("record already exists with the given id ({id})")]
    DuplicateKey { id: String },

    /// A lookup or delete matched no record
    #[error("no record exists with the given {key}")]
    NotFound { key: LookupKey },
}

impl StoreError {
    /// A `NotFound` for a missing record id.
    pub fn id_not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound {
            key: LookupKey::Id(id.into()),
        }
    }

    /// A `NotFound` for a date no record carries.
    pub fn date_not_found(date: NaiveDate) -> Self {
        StoreError::NotFound {
            key: LookupKey::Date(date),
        }
    }
}
