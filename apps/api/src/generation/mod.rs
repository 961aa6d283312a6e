// Resume generation: form fields → prompt → model → Document Formatter → blocks.
// All LLM calls go through the shared TextModel, never the HTTP client directly.

pub mod formatter;
pub mod generator;
pub mod handlers;
pub mod prompts;
