pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::analysis::handlers as analysis;
use crate::generation::handlers as generation;
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/analyze",
            post(analysis::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        .route("/api/v1/resumes/export", post(generation::handle_export))
        .with_state(state)
}
