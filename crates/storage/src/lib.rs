//! Storage layer for laureates
//!
//! SQLite-backed persistence for winners, organizations and addresses,
//! including the one-transaction import of normalized dataset records.

mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;

pub use error::{Result, StorageError};
pub use storage::{ImportedIds, Linked, Storage, StoreStats};
