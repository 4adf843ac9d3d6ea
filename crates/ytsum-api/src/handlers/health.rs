//! Health check and service info handlers.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Service info for `GET /`.
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "ytsum",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /": "Service info",
            "GET /health": "Health check",
            "POST /summarize": "Summarize a video (body: {video_url})"
        }
    }))
}
