//! Downloadable artifacts: pretty JSON for structured results, plain text for the letter.

use anyhow::{Context, Result};
use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::models::analysis::{AnalysisResult, CoverLetter};
use crate::models::interview::InterviewQuestionSet;

pub const ANALYSIS_FILE_NAME: &str = "cv_analysis.json";
pub const INTERVIEW_QUESTIONS_FILE_NAME: &str = "interview_questions.json";
pub const COVER_LETTER_FILE_NAME: &str = "cover_letter.txt";

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// A file offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl Artifact {
    pub fn analysis(analysis: &AnalysisResult) -> Result<Self> {
        Ok(Self {
            file_name: ANALYSIS_FILE_NAME,
            content_type: JSON_CONTENT_TYPE,
            body: pretty_json(analysis).context("failed to serialize analysis artifact")?,
        })
    }

    pub fn interview_questions(questions: &InterviewQuestionSet) -> Result<Self> {
        Ok(Self {
            file_name: INTERVIEW_QUESTIONS_FILE_NAME,
            content_type: JSON_CONTENT_TYPE,
            body: pretty_json(questions)
                .context("failed to serialize interview questions artifact")?,
        })
    }

    pub fn cover_letter(letter: &CoverLetter) -> Self {
        Self {
            file_name: COVER_LETTER_FILE_NAME,
            content_type: TEXT_CONTENT_TYPE,
            body: letter.as_str().to_string(),
        }
    }
}

impl IntoResponse for Artifact {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.file_name);
        (
            [
                (header::CONTENT_TYPE, self.content_type.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.body,
        )
            .into_response()
    }
}

/// Two-space indentation; non-ASCII is written literally, never `\u` escaped.
fn pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
