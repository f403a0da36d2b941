use anyhow::Result;
use geocat_http::{AppState, create_router};
use geocat_service::CatalogService;
use geocat_storage::StudyStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub(crate) async fn run(
    db_path: &Path,
    port: u16,
    host: String,
    assets: Option<PathBuf>,
) -> Result<()> {
    let store = Arc::new(StudyStore::open(db_path)?);
    let catalog = Arc::new(CatalogService::new(store));

    if let Some(dir) = &assets {
        tracing::info!("Serving viewer assets from {}", dir.display());
    }

    let state = Arc::new(AppState { catalog, assets_dir: assets });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
