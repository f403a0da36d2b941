//! Typed error enum for the service layer.

use geocat_storage::StorageError;
use thiserror::Error;

/// Service-layer error. Every engine operation is a read over the store, so
/// storage failure is the only failure mode; the enum keeps the layer's
/// error type its own so new variants don't ripple into callers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (not found, database unreachable, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Whether this error represents a not-found condition — a normal
    /// negative outcome rather than an internal failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }
}
