//! Node HTTP Routes
//!
//! Client surface (upload/download/list/health) plus the /sync entry points
//! used exclusively for inter-node traffic: GET /sync answers with this
//! node's directory, POST /sync routes straight into ingest, which is how
//! replication pushes and reconciliation pulls materialize on the receiver.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::node::{Coordinator, NodeError};
use crate::storage::{LocalBackend, ObjectRecord};

/// State shared across handlers
pub struct AppState {
    pub coordinator: Arc<Coordinator<LocalBackend>>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub file: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// Create the node's routes
pub fn node_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/upload", post(upload_handler))
        .route("/download/:name", get(download_handler))
        .route("/list", get(list_handler))
        .route("/sync", get(list_handler).post(upload_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        // Objects are not size-capped; without this, uploads and inbound
        // replication pushes over 2 MB would be rejected at the extractor.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

fn error_response(err: NodeError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code,
        }),
    )
}

fn bad_request(reason: String) -> (StatusCode, Json<ErrorResponse>) {
    error_response(NodeError::InvalidRequest(reason))
}

/// Accept a multipart upload (field `file`) and ingest it
async fn upload_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, Json<ErrorResponse>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("malformed multipart form: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| bad_request(format!("unreadable file part: {}", e)))?;

        let record = state
            .coordinator
            .ingest(&name, &data)
            .map_err(error_response)?;

        return Ok(Json(UploadResponse {
            message: "file stored".to_string(),
            file: record.name,
        }));
    }

    Err(bad_request("missing file part".to_string()))
}

/// Serve an object's bytes, falling back to peers on a local miss
async fn download_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<(HeaderMap, Bytes), (StatusCode, Json<ErrorResponse>)> {
    let data = state.coordinator.retrieve(&name).await.map_err(error_response)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );
    if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename={}", name)) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    Ok((headers, Bytes::from(data)))
}

/// This node's directory; also the /sync read answer for peers
async fn list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ObjectRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let records = state.coordinator.list_local().map_err(error_response)?;
    Ok(Json(records))
}

/// Fixed payload; succeeds whenever the process can respond
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Counter snapshot as JSON
async fn metrics_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let snapshot = state.coordinator.metrics().to_json();
    let value: Value = serde_json::from_str(&snapshot)
        .unwrap_or_else(|_| serde_json::json!({"error": "unserializable metrics"}));
    Json(value)
}
