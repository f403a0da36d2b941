//! Record store abstraction consumed by the query engine.
//!
//! Keeps the engine independent of the concrete SQLite implementation and
//! lets tests substitute an in-memory or fixture-backed store. The trait is
//! sync; async callers bridge with `spawn_blocking`.

use crate::StorageError;
use geocat_core::StudyRecord;
use serde::Serialize;

/// Groupable dimensions for [`RecordStore::count_grouped`].
///
/// Closed enum mapped to fixed column names, so grouping never interpolates
/// caller-controlled strings into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Organism,
    DataType,
}

impl GroupField {
    pub(crate) fn column(self) -> &'static str {
        match self {
            Self::Organism => "organism",
            Self::DataType => "data_type",
        }
    }
}

/// One group in a grouped count: a distinct field value and how many records
/// share it. An empty-string value is a valid distinct group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub value: String,
    pub count: i64,
}

/// Read access to the study collection.
pub trait RecordStore: Send + Sync {
    /// Fetch one record by id. `StorageError::NotFound` when absent.
    fn get(&self, id: i64) -> Result<StudyRecord, StorageError>;

    /// Return every record satisfying `predicate`, in store-native (rowid)
    /// order. Either the full matching set is returned or the call fails;
    /// partial results are never produced.
    fn scan(
        &self,
        predicate: &(dyn Fn(&StudyRecord) -> bool + Sync),
    ) -> Result<Vec<StudyRecord>, StorageError>;

    /// Total number of records.
    fn count(&self) -> Result<i64, StorageError>;

    /// Distinct values of `field` with per-value record counts, computed in
    /// a single pass. Group order is unspecified.
    fn count_grouped(&self, field: GroupField) -> Result<Vec<GroupCount>, StorageError>;
}
