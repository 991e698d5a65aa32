//! HTTP request handlers for the web server.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::AppState;

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Query parameters for card icon resolution.
#[derive(Debug, Deserialize)]
pub struct CardIconParams {
    /// Page URL to resolve icons for.
    pub url: String,
}

/// Resolve icon candidates for a card's page URL.
///
/// Responds with a JSON array of verified icon URLs. An empty array means
/// discovery found nothing usable; only an unparsable input URL is a 400.
pub async fn card_icons(
    State(state): State<AppState>,
    Query(params): Query<CardIconParams>,
) -> Response {
    match state.resolver.card_icons(&params.url).await {
        Ok(icons) => Json(icons).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// Query parameters for uploads.
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Asset bucket, `images` or `modules` by convention.
    #[serde(rename = "type", default = "default_upload_kind")]
    pub kind: String,
}

fn default_upload_kind() -> String {
    "images".to_string()
}

/// Store an uploaded file and respond with its public path.
///
/// Expects a multipart form with a `file` field; other fields are
/// ignored. The response body is the stored path as a JSON string, ready
/// to be used as a URL path on this server.
pub async fn upload(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> Response {
    // The bucket becomes a path segment; keep hostile values out of it
    if params.kind.is_empty() || params.kind.contains(['/', '\\']) || params.kind.contains("..") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid asset type" })),
        )
            .into_response();
    }

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "file field has no filename" })),
                )
                    .into_response();
            }
        };

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": e.to_string() })),
                )
                    .into_response();
            }
        };

        return match state.storage.store(&bytes, &filename, &params.kind) {
            Ok(path) => Json(path).into_response(),
            Err(e) => {
                tracing::error!("Upload failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": e.to_string() })),
                )
                    .into_response()
            }
        };
    }

    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "missing file field" })),
    )
        .into_response()
}

/// List the built-in glyph catalog.
pub async fn category_icons(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.names().to_vec())
}

/// Serve a stored asset back from disk.
pub async fn serve_asset(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    if path.contains("..") || path.starts_with('/') {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    let file_path = state.storage.resolve(&format!("ext-resources/{}", path));

    let content = match tokio::fs::read(&file_path).await {
        Ok(content) => content,
        Err(_) => {
            return (StatusCode::NOT_FOUND, "File not found").into_response();
        }
    };

    let mime = mime_guess::from_path(&file_path)
        .first_or_octet_stream()
        .to_string();

    ([(header::CONTENT_TYPE, mime)], content).into_response()
}
