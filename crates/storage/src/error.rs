//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, unreachable database,
//! bad ingest input) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity. A normal negative outcome,
    /// never retried and never fatal.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// SQL / connection failure. Propagated to the caller as-is; the store
    /// has no retry policy.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(String),

    /// Delimited input could not be parsed during bulk load.
    #[error("csv ingest error: {0}")]
    Ingest(#[from] csv::Error),

    /// Filesystem failure (opening the database file or CSV input).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection mutex poisoned by a panicking writer.
    #[error("database lock poisoned")]
    LockPoisoned,
}

impl StorageError {
    /// Whether this error represents a missing row rather than a failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
