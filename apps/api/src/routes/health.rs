use axum::Json;
use serde::Serialize;

use crate::llm_client;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub model: &'static str,
}

/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "resumate-api",
        version: env!("CARGO_PKG_VERSION"),
        model: llm_client::MODEL,
    })
}
