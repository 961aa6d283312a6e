//! Resume Generation: orchestrates the generation pipeline.
//!
//! Flow: validate form → build prompt → model call → format into blocks → return.
//! The document is regenerated from scratch on every call.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::formatter::format_document;
use crate::generation::prompts::{build_generation_prompt, GENERATION_SYSTEM};
use crate::llm_client::TextModel;
use crate::models::{Document, FormRecord};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub resume_id: Uuid,
    pub document: Document,
    /// Trimmed model output the document was built from.
    pub raw_text: String,
    pub generated_at: DateTime<Utc>,
}

/// Runs the full resume generation pipeline.
///
/// Steps:
/// 1. form.validate(): name and email are required
/// 2. build_generation_prompt() → prompt
/// 3. model.complete() → raw text (trimmed)
/// 4. format_document() → Document
pub async fn generate_resume(
    model: &dyn TextModel,
    form: &FormRecord,
) -> Result<GenerateResponse, AppError> {
    // Step 1: Validation happens before any collaborator call
    form.validate()?;

    let resume_id = Uuid::new_v4();
    info!(%resume_id, "Generating resume for {}", form.name.trim());

    // Steps 2-3: Prompt + model call
    let prompt = build_generation_prompt(form);
    let raw_text = model
        .complete(&prompt, GENERATION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Generation LLM call failed: {e}")))?
        .trim()
        .to_string();
    debug!(%resume_id, "Model response: {raw_text}");

    // Step 4: Format
    let document = format_document(&raw_text);
    info!(%resume_id, blocks = document.len(), "Resume generated");

    Ok(GenerateResponse {
        resume_id,
        document,
        raw_text,
        generated_at: Utc::now(),
    })
}
