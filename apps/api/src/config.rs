use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub tesseract_bin: String,
    pub ocr_language: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            tesseract_bin: env_or("TESSERACT_BIN", "tesseract"),
            ocr_language: env_or("OCR_LANGUAGE", "eng"),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .unwrap_or(Ok(DEFAULT_MAX_UPLOAD_BYTES))
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            port: 8080,
            rust_log: "info".to_string(),
            tesseract_bin: "tesseract".to_string(),
            ocr_language: "eng".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
