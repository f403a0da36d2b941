use anyhow::Result;
use geocat_core::StudyFilter;
use geocat_service::CatalogService;
use geocat_storage::StudyStore;
use std::path::Path;
use std::sync::Arc;

fn open_catalog(db_path: &Path) -> Result<CatalogService> {
    let store = Arc::new(StudyStore::open(db_path)?);
    Ok(CatalogService::new(store))
}

pub(crate) fn init(db_path: &Path) -> Result<()> {
    // Opening runs migrations; this just makes the step explicit.
    StudyStore::open(db_path)?;
    println!("Database ready at {}", db_path.display());
    Ok(())
}

pub(crate) fn find(
    db_path: &Path,
    organism: Option<String>,
    data_type: Option<String>,
    molecule: Option<String>,
    superseries: Option<String>,
) -> Result<()> {
    let catalog = open_catalog(db_path)?;
    let filter = StudyFilter { organism, data_type, molecule, superseries };
    let studies = catalog.find_studies(&filter)?;
    println!("{}", serde_json::to_string_pretty(&studies)?);
    Ok(())
}

pub(crate) fn get(db_path: &Path, id: i64) -> Result<()> {
    let catalog = open_catalog(db_path)?;
    match catalog.get_study(id) {
        Ok(study) => {
            println!("{}", serde_json::to_string_pretty(&study)?);
            Ok(())
        },
        Err(e) if e.is_not_found() => anyhow::bail!("no study with id {id}"),
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn stats(db_path: &Path) -> Result<()> {
    let catalog = open_catalog(db_path)?;
    let stats = catalog.stats()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
