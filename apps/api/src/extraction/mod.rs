//! Document extraction — turns uploaded files into plain text for analysis.
//!
//! Format parsing is delegated to external crates (`pdf-extract`, `zip`); this module
//! only picks the right one and pulls the text out. Parsing is CPU-bound and runs on
//! the blocking pool.

pub mod office;
pub mod pdf;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file format: {0}. Upload a .txt, .md, .pdf, .docx or .pptx file.")]
    UnsupportedFormat(String),

    #[error("Document text is not valid UTF-8")]
    InvalidUtf8,

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not open document archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Document is missing required part '{0}'")]
    MissingPart(String),

    #[error("I/O error while reading document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document part '{part}' expands beyond the {limit}-byte limit")]
    PartTooLarge { part: String, limit: usize },

    #[error("No extractable text found in document")]
    NoText,

    #[error("Extraction task failed: {0}")]
    Task(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
    Pptx,
}

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

impl DocumentFormat {
    /// Detects the format from the file extension, falling back to the declared
    /// content type.
    pub fn detect(
        file_name: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<Self, ExtractionError> {
        let by_extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .and_then(|(_, ext)| match ext.to_ascii_lowercase().as_str() {
                "txt" | "text" | "md" | "markdown" => Some(Self::PlainText),
                "pdf" => Some(Self::Pdf),
                "docx" => Some(Self::Docx),
                "pptx" => Some(Self::Pptx),
                _ => None,
            });

        let by_mime = || {
            let mime = content_type?.split(';').next()?.trim().to_ascii_lowercase();
            match mime.as_str() {
                "text/plain" | "text/markdown" => Some(Self::PlainText),
                "application/pdf" => Some(Self::Pdf),
                DOCX_MIME => Some(Self::Docx),
                PPTX_MIME => Some(Self::Pptx),
                _ => None,
            }
        };

        by_extension.or_else(by_mime).ok_or_else(|| {
            ExtractionError::UnsupportedFormat(
                file_name
                    .or(content_type)
                    .unwrap_or("unknown upload")
                    .to_string(),
            )
        })
    }
}

/// Extracts plain text from an uploaded document. Archive formats may not inflate
/// past `max_bytes`.
pub async fn extract_text(
    format: DocumentFormat,
    data: Bytes,
    max_bytes: usize,
) -> Result<String, ExtractionError> {
    let text = match format {
        DocumentFormat::PlainText => {
            String::from_utf8(data.to_vec()).map_err(|_| ExtractionError::InvalidUtf8)?
        }
        _ => tokio::task::spawn_blocking(move || extract_binary(format, &data, max_bytes))
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))??,
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }

    tracing::debug!(?format, chars = text.chars().count(), "Extracted document text");
    Ok(text)
}

fn extract_binary(
    format: DocumentFormat,
    data: &[u8],
    max_bytes: usize,
) -> Result<String, ExtractionError> {
    match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(data),
        DocumentFormat::Docx => office::extract_docx_text(data, max_bytes),
        DocumentFormat::Pptx => office::extract_pptx_text(data, max_bytes),
        DocumentFormat::PlainText => {
            String::from_utf8(data.to_vec()).map_err(|_| ExtractionError::InvalidUtf8)
        }
    }
}
