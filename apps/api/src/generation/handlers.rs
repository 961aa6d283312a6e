//! Axum route handlers for the Generation API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::export::{render_pdf, EXPORT_FILENAME};
use crate::generation::generator::{generate_resume, GenerateResponse};
use crate::models::{Document, FormRecord};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub document: Document,
}

/// POST /api/v1/resumes/generate
///
/// Builds a resume from the form fields. Returns the block document and the raw model text.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(form): Json<FormRecord>,
) -> Result<Json<GenerateResponse>, AppError> {
    let response = generate_resume(state.model.as_ref(), &form).await?;
    Ok(Json(response))
}

/// POST /api/v1/resumes/export
///
/// Renders a previously generated document to PDF and returns it as a download.
pub async fn handle_export(Json(request): Json<ExportRequest>) -> Result<Response, AppError> {
    let document = request.document;
    document
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid document: {e}")))?;

    // printpdf is synchronous and CPU-bound.
    let bytes = tokio::task::spawn_blocking(move || render_pdf(&document))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| AppError::Export(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
