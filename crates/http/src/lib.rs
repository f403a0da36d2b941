//! HTTP API server for geocat.

pub mod api_error;
mod assets;
mod blocking;
mod handlers;
mod query_types;

use axum::{Json, Router, routing::get};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use geocat_service::CatalogService;

pub use api_error::ApiError;
pub use query_types::StudyQuery;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Read-only query engine over the record store.
    pub catalog: Arc<CatalogService>,
    /// Directory served at `/`; `None` disables static serving.
    pub assets_dir: Option<PathBuf>,
}

/// Build the full route table.
///
/// CORS is permissive: the API is read-only and unauthenticated, and the
/// bundled viewer may be hosted from a different origin.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(assets::serve_index))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/studies", get(handlers::studies::find_studies))
        .route("/api/studies/{id}", get(handlers::studies::get_study))
        .route("/api/stats", get(handlers::stats::get_stats))
        .route("/{*path}", get(assets::serve_static))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Serialize)]
struct VersionResponse {
    version: &'static str,
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
