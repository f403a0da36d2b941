//! Helper for running the sync query engine inside async handlers.
//!
//! The record store is a blocking SQLite connection, so every handler routes
//! its store access through `spawn_blocking` rather than stalling the
//! runtime worker.

use crate::ApiError;
use axum::Json;
use geocat_service::ServiceError;
use serde::Serialize;
use tokio::task::spawn_blocking;

/// Run a blocking closure and wrap its result as `Json`.
pub async fn blocking_json<T, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static + Serialize,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("join error: {e}")))?
        .map(Json)
        .map_err(ApiError::from)
}
