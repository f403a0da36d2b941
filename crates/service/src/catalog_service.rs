use std::sync::Arc;

use geocat_core::{StudyFilter, StudyRecord};
use geocat_storage::{GroupField, RecordStore};
use serde::Serialize;

use crate::ServiceError;

/// Per-organism slice of the catalog stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganismCount {
    pub organism: String,
    pub count: i64,
}

/// Per-data-type slice of the catalog stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataTypeCount {
    pub data_type: String,
    pub count: i64,
}

/// Grouped-count aggregation over the whole catalog.
///
/// Grouping is exact-match: two organism strings differing only in case are
/// two distinct groups. Group order is unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_studies: i64,
    pub by_organism: Vec<OrganismCount>,
    pub by_data_type: Vec<DataTypeCount>,
}

/// Read-only query and aggregation operations over the record store.
pub struct CatalogService {
    store: Arc<dyn RecordStore>,
}

impl CatalogService {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Return every study satisfying all present criteria, in store order.
    /// No result cap and no pagination.
    pub fn find_studies(&self, filter: &StudyFilter) -> Result<Vec<StudyRecord>, ServiceError> {
        let predicates = filter.predicates();
        let studies =
            self.store.scan(&|study: &StudyRecord| predicates.iter().all(|p| p(study)))?;
        tracing::debug!("find_studies matched {} records", studies.len());
        Ok(studies)
    }

    /// Fetch one study by id. A missing id surfaces as a not-found outcome,
    /// not an internal error.
    pub fn get_study(&self, id: i64) -> Result<StudyRecord, ServiceError> {
        Ok(self.store.get(id)?)
    }

    /// Total record count plus grouped counts by organism and by data type,
    /// each computed in a single pass over the store.
    pub fn stats(&self) -> Result<CatalogStats, ServiceError> {
        let total_studies = self.store.count()?;
        let by_organism = self
            .store
            .count_grouped(GroupField::Organism)?
            .into_iter()
            .map(|g| OrganismCount { organism: g.value, count: g.count })
            .collect();
        let by_data_type = self
            .store
            .count_grouped(GroupField::DataType)?
            .into_iter()
            .map(|g| DataTypeCount { data_type: g.value, count: g.count })
            .collect();

        Ok(CatalogStats { total_studies, by_organism, by_data_type })
    }
}
