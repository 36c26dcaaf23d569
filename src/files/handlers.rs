use crate::config::AppConfig;
use crate::search::types::ErrorResponse;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::io::ErrorKind;
use std::sync::Arc;

pub async fn handle_get_file(
    Path(path): Path<String>,
    Extension(config): Extension<Arc<AppConfig>>,
) -> Response {
    if !is_valid_relative_path(&path) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid file path".to_string(),
            }),
        )
            .into_response();
    }

    let full_path = config.docs_root.join(&path);
    match tokio::fs::read(&full_path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime_for_path(&path))],
            bytes,
        )
            .into_response(),
        Err(err) if err.kind() == ErrorKind::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "File not found".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to read {}: {}", full_path.display(), err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// A servable path is relative and contains no parent-directory segments.
pub fn is_valid_relative_path(path: &str) -> bool {
    if path.is_empty() || path.starts_with('/') || path.contains('\\') {
        return false;
    }
    path.split('/').all(|segment| segment != ".." && !segment.is_empty())
}

/// Infer the Content-Type from the file extension. The library is almost
/// exclusively PDFs, which doubles as the fallback.
pub fn mime_for_path(path: &str) -> &'static str {
    let extension = path.rsplit('.').next().unwrap_or_default().to_lowercase();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        "json" => "application/json",
        "html" => "text/html",
        _ => "application/pdf",
    }
}
