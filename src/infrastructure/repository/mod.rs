//! Repository implementations.
//!
//! Concrete implementations of the `RecordStore` trait defined by the
//! domain layer. Upstream layers depend on the trait, not on these types.

pub mod inmemory;

pub use inmemory::InMemoryRecordStore;
