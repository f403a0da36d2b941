use axum::{Json, extract::State};
use std::sync::Arc;

use geocat_service::CatalogStats;

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::blocking_json;

/// `GET /api/stats` — total plus grouped counts by organism and data type.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CatalogStats>, ApiError> {
    let catalog = Arc::clone(&state.catalog);
    blocking_json(move || catalog.stats()).await
}
