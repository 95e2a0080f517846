use bytes::Bytes;
use serde::Serialize;

/// File type, derived solely from the file-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// `.pdf` or `.txt`, ASCII case-insensitive. No magic-byte sniffing.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        if ext.eq_ignore_ascii_case("pdf") {
            Some(DocumentKind::Pdf)
        } else if ext.eq_ignore_ascii_case("txt") {
            Some(DocumentKind::PlainText)
        } else {
            None
        }
    }
}

/// An uploaded file, alive for a single upload-extraction cycle.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

impl SourceDocument {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::from_file_name(&self.file_name)
    }
}

/// Plain text pulled out of a CV. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
