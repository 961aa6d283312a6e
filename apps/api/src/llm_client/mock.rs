use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextModel};

/// Deterministic `TextModel` for tests: returns a canned completion and records prompts.
pub struct MockModel {
    reply: Result<String, u16>,
    prompts: Mutex<Vec<String>>,
}

impl MockModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with an API error carrying `status`.
    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextModel for MockModel {
    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(LlmError::Api {
                status: *status,
                message: "mock failure".to_string(),
            }),
        }
    }
}
