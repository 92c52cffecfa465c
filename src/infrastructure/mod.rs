//! Infrastructure layer for the HACCP record store.

pub mod repository;
