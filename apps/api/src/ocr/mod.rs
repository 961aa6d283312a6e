//! Text sources for uploaded resumes.
//!
//! Images go through an `OcrEngine` (Tesseract by default); PDFs carry a text
//! layer and are read directly with `pdf-extract`. Both are blocking, external
//! work that completes before any parsing happens.

use std::io::Write;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("failed to start OCR engine '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("OCR engine exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Png,
    Jpeg,
    Pdf,
}

impl UploadKind {
    /// Maps a MIME type (parameters ignored) to an accepted kind.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "application/pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Png | Self::Jpeg)
    }

    fn extension(&self) -> &'static str {
        match self {
            Self::Png => ".png",
            Self::Jpeg => ".jpg",
            Self::Pdf => ".pdf",
        }
    }
}

/// A validated resume upload.
#[derive(Debug, Clone)]
pub struct Upload {
    pub kind: UploadKind,
    pub bytes: Bytes,
}

/// Optical character recognition over a single image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(
        &self,
        image: &[u8],
        kind: UploadKind,
        language: &str,
    ) -> Result<String, OcrError>;
}

/// Runs the `tesseract` command-line tool, printing recognized text to stdout.
#[derive(Debug, Clone)]
pub struct TesseractCli {
    binary: String,
}

impl TesseractCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractCli {
    async fn recognize(
        &self,
        image: &[u8],
        kind: UploadKind,
        language: &str,
    ) -> Result<String, OcrError> {
        // Tesseract only reads images from a path.
        let mut file = tempfile::Builder::new()
            .prefix("resumate-")
            .suffix(kind.extension())
            .tempfile()?;
        file.write_all(image)?;
        file.flush()?;

        let output = tokio::process::Command::new(&self.binary)
            .arg(file.path())
            .arg("stdout")
            .arg("-l")
            .arg(language)
            .output()
            .await
            .map_err(|source| OcrError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("Tesseract recognized {} characters", text.len());
        Ok(text)
    }
}

/// Reads the text layer of a PDF. Runs on the blocking pool.
pub async fn extract_pdf_text(bytes: Bytes) -> Result<String, OcrError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await?
        .map_err(|e| OcrError::Pdf(e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_kind_from_content_type() {
        assert_eq!(UploadKind::from_content_type("image/png"), Some(UploadKind::Png));
        assert_eq!(UploadKind::from_content_type("image/jpeg"), Some(UploadKind::Jpeg));
        assert_eq!(UploadKind::from_content_type("image/jpg"), Some(UploadKind::Jpeg));
        assert_eq!(
            UploadKind::from_content_type("Application/PDF; charset=binary"),
            Some(UploadKind::Pdf)
        );
    }

    #[test]
    fn test_upload_kind_rejects_other_types() {
        assert_eq!(UploadKind::from_content_type("image/gif"), None);
        assert_eq!(UploadKind::from_content_type("text/plain"), None);
        assert_eq!(UploadKind::from_content_type(""), None);
    }

    #[test]
    fn test_is_image() {
        assert!(UploadKind::Png.is_image());
        assert!(UploadKind::Jpeg.is_image());
        assert!(!UploadKind::Pdf.is_image());
    }

    #[tokio::test]
    async fn test_missing_tesseract_binary_is_spawn_error() {
        let engine = TesseractCli::new("resumate-test-no-such-ocr-binary");
        let err = engine
            .recognize(b"not really a png", UploadKind::Png, "eng")
            .await
            .unwrap_err();
        assert!(matches!(err, OcrError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_an_error() {
        let result = extract_pdf_text(Bytes::from_static(b"%PDF-garbage")).await;
        assert!(result.is_err());
    }
}
