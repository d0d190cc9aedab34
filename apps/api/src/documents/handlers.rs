//! Axum route handlers for the Documents API.

use axum::{extract::Multipart, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::documents::extract::{extract_text, ExtractError};
use crate::documents::parser::{parse_resume, ResumeFields};
use crate::errors::AppError;

/// Multipart field carrying the upload.
const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub text: String,
    pub word_count: usize,
    pub fields: ResumeFields,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/extract
///
/// Accepts a multipart upload under `file`, returns its text and the draft fields
/// parsed from it.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload.txt").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = upload
        .ok_or_else(|| AppError::Validation(format!("Missing multipart field '{FILE_FIELD}'")))?;
    info!(file_name = %file_name, size = bytes.len(), "Extracting uploaded document");

    // PDF and DOCX parsing is CPU-bound, and pdf-extract may panic on malformed input.
    let name = file_name.clone();
    let text = tokio::task::spawn_blocking(move || extract_text(&name, &bytes))
        .await
        .map_err(|e| {
            error!("Document extraction task failed: {e}");
            ExtractError::Pdf("the file could not be parsed".to_string())
        })??;

    Ok(Json(ExtractResponse {
        file_name,
        word_count: text.split_whitespace().count(),
        fields: parse_resume(&text),
        text,
    }))
}

/// POST /api/v1/documents/parse
pub async fn handle_parse(Json(request): Json<ParseRequest>) -> Json<ResumeFields> {
    Json(parse_resume(&request.text))
}
