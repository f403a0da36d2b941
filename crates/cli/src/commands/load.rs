use anyhow::{Context, Result};
use geocat_storage::{StudyStore, ingest_csv_file};
use std::path::Path;

pub(crate) fn run(db_path: &Path, csv_path: &Path) -> Result<()> {
    let store = StudyStore::open(db_path)?;
    let inserted = ingest_csv_file(&store, csv_path)
        .with_context(|| format!("failed to load {}", csv_path.display()))?;

    println!("Loaded {} studies from {}", inserted, csv_path.display());
    Ok(())
}
