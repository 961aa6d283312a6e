// Resume analysis: uploaded image/PDF → extracted text → model → AnalysisRecord.
// All LLM calls go through the shared TextModel, never the HTTP client directly.

pub mod analyzer;
pub mod handlers;
pub mod parser;
pub mod prompts;
