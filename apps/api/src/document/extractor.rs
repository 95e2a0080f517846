//! Document Text Extractor — PDF and plain-text CVs to `ExtractedText`.
//!
//! Dispatch is by file-name suffix only. Every error, including a panic inside
//! the PDF library, comes back as `Failure::UnsupportedOrUnreadable`.

use std::panic;

use tracing::{debug, warn};

use crate::errors::Failure;
use crate::models::document::{DocumentKind, ExtractedText, SourceDocument};

/// Extracts the text of `document`. An empty text layer is not an error.
pub fn extract(document: &SourceDocument) -> Result<ExtractedText, Failure> {
    let result = match document.kind() {
        Some(DocumentKind::Pdf) => read_pdf(&document.bytes),
        Some(DocumentKind::PlainText) => read_txt(&document.bytes),
        None => Err(Failure::UnsupportedOrUnreadable(format!(
            "unsupported file type: {}",
            document.file_name
        ))),
    };

    match result {
        Ok(text) => {
            debug!(
                "Extracted {} characters from {}",
                text.char_count(),
                document.file_name
            );
            Ok(text)
        }
        Err(e) => {
            warn!("Failed to extract {}: {e}", document.file_name);
            Err(e)
        }
    }
}

fn read_pdf(bytes: &[u8]) -> Result<ExtractedText, Failure> {
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| Failure::UnsupportedOrUnreadable("PDF parser aborted".to_string()))?
        .map_err(|e| Failure::UnsupportedOrUnreadable(format!("PDF extraction failed: {e:?}")))?;

    Ok(ExtractedText::new(join_pages(&pages)))
}

fn read_txt(bytes: &[u8]) -> Result<ExtractedText, Failure> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| Failure::UnsupportedOrUnreadable(format!("text is not valid UTF-8: {e}")))?;
    Ok(ExtractedText::new(text.trim()))
}

/// Each page followed by a newline, then the whole thing trimmed.
fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(page.as_ref());
        text.push('\n');
    }
    text.trim().to_string()
}
