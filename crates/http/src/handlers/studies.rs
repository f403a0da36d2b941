use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use std::sync::Arc;

use geocat_core::StudyRecord;

use crate::api_error::ApiError;
use crate::blocking::blocking_json;
use crate::query_types::StudyQuery;
use crate::AppState;

/// `GET /api/studies` — filtered listing. Absent criteria return everything;
/// a criterion that fails to decode is treated as absent, not as an error.
pub async fn find_studies(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Vec<StudyRecord>>, ApiError> {
    let catalog = Arc::clone(&state.catalog);
    let filter = StudyQuery::from_raw_query(raw.as_deref()).into_filter();
    blocking_json(move || catalog.find_studies(&filter)).await
}

/// `GET /api/studies/{id}` — point lookup; 404 for a missing id.
pub async fn get_study(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<StudyRecord>, ApiError> {
    let catalog = Arc::clone(&state.catalog);
    blocking_json(move || catalog.get_study(id)).await
}
