//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};

use crate::analysis::analyzer::{analyze_resume, AnalyzeResponse};
use crate::errors::AppError;
use crate::ocr::{Upload, UploadKind};
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";
const MISSING_FILE: &str = "Please upload a resume image first!";
const INVALID_TYPE: &str = "Invalid file type! Please upload a PNG or JPG image.";

/// POST /api/v1/resumes/analyze
///
/// Multipart upload with a `file` field (PNG, JPEG or PDF).
/// Returns a fresh analysis record; previous analyses are not retained.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_upload(&mut multipart, state.config.max_upload_bytes).await?;

    let response = analyze_resume(
        state.model.as_ref(),
        state.ocr.as_ref(),
        &state.config.ocr_language,
        upload,
    )
    .await?;

    Ok(Json(response))
}

/// Pulls the `file` field out of the form, rejecting bad uploads before any collaborator runs.
async fn read_upload(multipart: &mut Multipart, max_bytes: usize) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, max_bytes))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let kind = field
            .content_type()
            .and_then(UploadKind::from_content_type)
            .ok_or_else(|| AppError::Validation(INVALID_TYPE.to_string()))?;

        let bytes = field.bytes().await.map_err(|e| upload_error(e, max_bytes))?;

        if bytes.is_empty() {
            return Err(AppError::Validation(MISSING_FILE.to_string()));
        }
        if bytes.len() > max_bytes {
            return Err(too_large(max_bytes));
        }

        return Ok(Upload { kind, bytes });
    }

    Err(AppError::Validation(MISSING_FILE.to_string()))
}

fn upload_error(e: MultipartError, max_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large(max_bytes)
    } else {
        AppError::Validation(format!("Malformed upload: {}", e.body_text()))
    }
}

fn too_large(max_bytes: usize) -> AppError {
    AppError::Validation(format!(
        "File too large! Maximum size is {} MB.",
        max_bytes.div_ceil(1024 * 1024)
    ))
}
