use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextModel;
use crate::ocr::OcrEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model collaborator, created once at startup and shared by both pipelines.
    pub model: Arc<dyn TextModel>,
    pub ocr: Arc<dyn OcrEngine>,
    pub config: Config,
}
