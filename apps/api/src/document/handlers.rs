//! Axum route handlers for document intake.

use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::document::extractor::extract;
use crate::errors::{AppError, Failure};
use crate::models::document::{DocumentKind, SourceDocument};

/// Multipart field carrying the uploaded CV.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub kind: DocumentKind,
    pub text: String,
    pub char_count: usize,
}

/// POST /api/v1/documents/extract
///
/// Accepts a multipart upload (`file` field, `.pdf` or `.txt`) and returns its text.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let document = read_upload(&mut multipart).await?;

    let kind = document.kind().ok_or_else(|| {
        Failure::UnsupportedOrUnreadable(format!("unsupported file type: {}", document.file_name))
    })?;
    let file_name = document.file_name.clone();

    // PDF parsing is CPU-bound; keep it off the async workers.
    let text = tokio::task::spawn_blocking(move || extract(&document))
        .await
        .map_err(|e| Failure::UnsupportedOrUnreadable(format!("extraction task failed: {e}")))??;

    if text.is_empty() {
        warn!("{file_name} has no extractable text layer");
    } else {
        info!("Extracted {file_name}: {} characters", text.char_count());
    }

    Ok(Json(ExtractResponse {
        file_name,
        kind,
        char_count: text.char_count(),
        text: text.into_string(),
    }))
}

async fn read_upload(multipart: &mut Multipart) -> Result<SourceDocument, AppError> {
    // Multipart errors keep their own status: an upload over the route's
    // body limit surfaces here as 413, a broken body as 400.
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("uploaded file has no file name".to_string()))?;
        let bytes = field.bytes().await?;
        return Ok(SourceDocument::new(file_name, bytes));
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}
