//! Resume Analysis: orchestrates the analysis pipeline.
//!
//! Flow: extract text (OCR or PDF text layer) → build prompt → model call →
//!       parse → return a fresh record. Nothing is persisted between invocations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::parser::parse_analysis;
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::TextModel;
use crate::models::AnalysisRecord;
use crate::ocr::{extract_pdf_text, OcrEngine, Upload};

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analysis: AnalysisRecord,
    /// Character count of the text the model was given.
    pub extracted_chars: usize,
    pub analyzed_at: DateTime<Utc>,
}

/// Runs the full analysis pipeline for one upload.
///
/// Steps:
/// 1. extract_text() → resume text
/// 2. build_analysis_prompt() → prompt
/// 3. model.complete() → raw model text
/// 4. parse_analysis() → AnalysisRecord (never fails)
pub async fn analyze_resume(
    model: &dyn TextModel,
    ocr: &dyn OcrEngine,
    ocr_language: &str,
    upload: Upload,
) -> Result<AnalyzeResponse, AppError> {
    let analysis_id = Uuid::new_v4();
    info!(%analysis_id, kind = ?upload.kind, bytes = upload.bytes.len(), "Starting resume analysis");

    // Step 1: Text extraction
    let resume_text = extract_text(ocr, ocr_language, upload).await?;
    debug!(%analysis_id, "Extracted text: {resume_text}");

    // Steps 2-3: Prompt + model call
    let prompt = build_analysis_prompt(&resume_text);
    let raw = model
        .complete(&prompt, ANALYSIS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Analysis LLM call failed: {e}")))?;
    debug!(%analysis_id, "Model response: {raw}");

    // Step 4: Parse
    let analysis = parse_analysis(&raw);
    info!(
        %analysis_id,
        rating = %analysis.rating,
        key_points = analysis.key_points.len(),
        "Resume analysis complete"
    );

    Ok(AnalyzeResponse {
        analysis_id,
        analysis,
        extracted_chars: resume_text.chars().count(),
        analyzed_at: Utc::now(),
    })
}

async fn extract_text(
    ocr: &dyn OcrEngine,
    ocr_language: &str,
    upload: Upload,
) -> Result<String, AppError> {
    let text = if upload.kind.is_image() {
        ocr.recognize(&upload.bytes, upload.kind, ocr_language).await
    } else {
        extract_pdf_text(upload.bytes).await
    }
    .map_err(|e| AppError::Ocr(e.to_string()))?;

    Ok(text)
}
