//! Static asset serving for the bundled viewer UI.
//!
//! Serves files from a configured directory with a strict extension
//! allow-list; everything else (database files, source files, dotfiles,
//! traversal attempts) gets 403.

use axum::extract::{Path as UrlPath, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::{ApiError, AppState};

const ALLOWED_EXTENSIONS: [&str; 9] =
    ["html", "css", "js", "svg", "png", "jpg", "jpeg", "gif", "ico"];

fn content_type(extension: &str) -> &'static str {
    match extension {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// `GET /` — the viewer entry point.
pub async fn serve_index(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    serve_from(state.assets_dir.as_deref(), "index.html").await
}

/// `GET /{*path}` — allow-listed static files.
pub async fn serve_static(
    State(state): State<Arc<AppState>>,
    UrlPath(path): UrlPath<String>,
) -> Result<Response, ApiError> {
    serve_from(state.assets_dir.as_deref(), &path).await
}

async fn serve_from(assets_dir: Option<&Path>, requested: &str) -> Result<Response, ApiError> {
    let Some(assets_dir) = assets_dir else {
        return Err(ApiError::NotFound("no assets directory configured".to_owned()));
    };

    let relative = PathBuf::from(requested);
    // Reject anything that could escape the assets directory.
    if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
        return Err(ApiError::Forbidden(format!("path not allowed: {requested}")));
    }

    let extension = relative.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !ALLOWED_EXTENSIONS.contains(&extension) {
        return Err(ApiError::Forbidden(format!("file type not allowed: {requested}")));
    }

    let full_path = assets_dir.join(&relative);
    match tokio::fs::read(&full_path).await {
        Ok(bytes) => Ok((
            [(header::CONTENT_TYPE, content_type(extension))],
            bytes,
        )
            .into_response()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ApiError::NotFound(format!("no such asset: {requested}")))
        },
        Err(e) => {
            Err(ApiError::Internal(anyhow::anyhow!(
                "failed to read asset {}: {}",
                full_path.display(),
                e
            )))
        },
    }
}
