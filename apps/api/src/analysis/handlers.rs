//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::analysis::analyzer::AnalysisInput;
use crate::analysis::comparison::{compare_versions, CompareRequest, ComparisonReport};
use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentFormat};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadAnalysisResponse {
    pub file_name: Option<String>,
    pub format: DocumentFormat,
    pub extracted_chars: usize,
    pub report: AnalysisReport,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    Json(input): Json<AnalysisInput>,
) -> Result<Json<AnalysisReport>, AppError> {
    let result = input.analyze()?;
    Ok(Json(AnalysisReport::from_result(&input.target_keyword, result)))
}

/// POST /api/v1/analyze/compare
pub async fn handle_compare(
    Json(req): Json<CompareRequest>,
) -> Result<Json<ComparisonReport>, AppError> {
    let report = compare_versions(&req.previous_text, &req.current_text, &req.target_keyword)?;
    Ok(Json(report))
}

/// POST /api/v1/analyze/upload
///
/// Multipart fields: `file` (txt, md, pdf, docx, pptx) and `target_keyword`.
/// The keyword is validated before any extraction work starts.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadAnalysisResponse>, AppError> {
    let mut upload: Option<(Option<String>, Option<String>, Bytes)> = None;
    let mut target_keyword = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Invalid multipart body", e))?
    {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Failed to read upload", e))?;
                upload = Some((file_name, content_type, data));
            }
            Some("target_keyword") => {
                target_keyword = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Failed to read target_keyword", e))?;
            }
            _ => {}
        }
    }

    let (file_name, content_type, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;
    if target_keyword.trim().is_empty() {
        return Err(AppError::Validation(
            "target_keyword cannot be empty".to_string(),
        ));
    }

    let format = DocumentFormat::detect(file_name.as_deref(), content_type.as_deref())?;
    info!(
        "Extracting {:?} upload ({} bytes, file: {:?})",
        format,
        data.len(),
        file_name
    );
    let text = extract_text(format, data, state.config.max_upload_bytes).await?;

    let input = AnalysisInput {
        text,
        target_keyword,
    };
    let result = input.analyze()?;

    Ok(Json(UploadAnalysisResponse {
        file_name,
        format,
        extracted_chars: input.text.chars().count(),
        report: AnalysisReport::from_result(&input.target_keyword, result),
    }))
}

/// Keeps the body-limit rejection distinct from malformed uploads.
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    let message = format!("{context}: {}", e.body_text());
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::Validation(message)
    }
}
