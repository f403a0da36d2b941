//! Storage layer for geocat
//!
//! A single-file SQLite store holding study records, plus the bulk CSV
//! ingestion path. Every query operation is a pure read; ingestion and
//! schema setup are expected to complete before query traffic begins.

mod error;
mod ingest;
mod migrations;
mod sqlite;
mod traits;

#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use ingest::{ingest_csv, ingest_csv_file};
pub use migrations::run_migrations;
pub use sqlite::StudyStore;
pub use traits::{GroupCount, GroupField, RecordStore};
