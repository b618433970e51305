use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Liveness probe. Does not reach the backend.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
