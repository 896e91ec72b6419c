use axum::http::StatusCode;
use serde_json::json;

use crate::response::ModelResponse;

pub async fn health() -> ModelResponse {
    ModelResponse::ok(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ModelResponse {
    ModelResponse::error(StatusCode::NOT_FOUND, "Not found")
}
