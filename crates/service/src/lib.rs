//! Query engine for geocat
//!
//! Translates optional filter criteria into a predicate over the record
//! store and computes grouped-count aggregations. Read-only: nothing in this
//! crate mutates the store.

mod catalog_service;
mod error;

pub use catalog_service::{CatalogService, CatalogStats, DataTypeCount, OrganismCount};
pub use error::ServiceError;
