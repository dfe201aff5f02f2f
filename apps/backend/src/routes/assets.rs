//! Static assets under /static

use std::path::{Component, Path as FsPath};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::AppState;

/// Content type derived from the file extension
pub fn content_type_for(path: &str) -> &'static str {
    let extension = FsPath::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Only plain relative paths may be served
fn is_safe(path: &str) -> bool {
    let path = FsPath::new(path);
    path.components().next().is_some()
        && path.components().all(|c| matches!(c, Component::Normal(_)))
}

/// GET /static/*path
pub async fn serve(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    if !is_safe(&path) {
        return not_found();
    }

    match tokio::fs::read(state.static_dir.join(&path)).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type_for(&path))], bytes).into_response(),
        Err(err) => {
            tracing::debug!(path = %path, error = %err, "static asset not served");
            not_found()
        }
    }
}

/// GET /static without a file name
pub async fn missing() -> Response {
    not_found()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}
