//! Accessor trait giving the store its view of a record.

use chrono::NaiveDate;

/// A single tracked control record.
///
/// The store treats implementors as opaque payloads: it reads only the
/// unique identifier and the control date, and never inspects any other
/// field. Any caller-supplied type implementing this trait can be stored.
pub trait ControlRecord {
    /// Unique identifier of the record within one store instance.
    fn id(&self) -> &str;

    /// Calendar date the control observation was taken on.
    fn date(&self) -> NaiveDate;
}
