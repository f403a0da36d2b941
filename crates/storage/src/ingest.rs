//! Bulk CSV load into the study store.
//!
//! Header-driven: rows are matched to fields by column name, columns the
//! input lacks default to the empty string, and columns the schema does not
//! know are ignored. The load is additive — existing records are never
//! touched — and transactional: a malformed row aborts the whole load.

use crate::{StorageError, StudyStore};
use geocat_core::NewStudy;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Open `path` and load it. File problems surface as `StorageError::Io`.
pub fn ingest_csv_file(store: &StudyStore, path: &Path) -> Result<usize, StorageError> {
    let file = File::open(path)?;
    ingest_csv(store, file)
}

/// Load every row of `input` into `store`, returning the number inserted.
pub fn ingest_csv<R: Read>(store: &StudyStore, input: R) -> Result<usize, StorageError> {
    let mut reader = csv::Reader::from_reader(input);

    let mut studies: Vec<NewStudy> = Vec::new();
    for row in reader.deserialize() {
        studies.push(row?);
    }

    let inserted = store.insert_batch(&studies)?;
    tracing::info!("Ingested {} studies", inserted);
    Ok(inserted)
}
