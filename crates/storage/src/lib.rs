//! Persistence for habit trackers.
//!
//! This crate provides a trait-based persistence interface over two
//! interchangeable on-disk formats (JSON and CSV) with the same round-trip
//! guarantee: saving and reloading reproduces every habit field, including
//! explicit `false` history entries.

#![warn(missing_docs)]

mod error;
mod store;

pub mod csv;
pub mod json;

pub use error::{Result, StorageError};
pub use store::TrackerStore;
