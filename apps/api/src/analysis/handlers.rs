//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::artifacts::Artifact;
use crate::analysis::pipeline::{analyze_cv, generate_cover_letter, generate_interview_questions};
use crate::errors::AppError;
use crate::models::analysis::{AnalysisResult, CoverLetter};
use crate::models::document::ExtractedText;
use crate::models::interview::InterviewQuestionSet;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CvTextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CoverLetterResponse {
    pub cover_letter: CoverLetter,
}

fn cv_text(text: String) -> Result<ExtractedText, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    Ok(ExtractedText::new(text))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<CvTextRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let text = cv_text(request.text)?;
    let analysis = analyze_cv(&state.gateway, &text).await?;
    Ok(Json(analysis))
}

/// POST /api/v1/cover-letter
///
/// The job description is required; the letter is tailored to it.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let text = cv_text(request.text)?;
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let cover_letter = generate_cover_letter(&state.gateway, &text, &request.job_description).await?;
    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// POST /api/v1/interview-questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(request): Json<CvTextRequest>,
) -> Result<Json<InterviewQuestionSet>, AppError> {
    let text = cv_text(request.text)?;
    let questions = generate_interview_questions(&state.gateway, &text).await?;
    Ok(Json(questions))
}

/// POST /api/v1/artifacts/analysis
pub async fn handle_analysis_artifact(
    Json(analysis): Json<AnalysisResult>,
) -> Result<Artifact, AppError> {
    Ok(Artifact::analysis(&analysis)?)
}

/// POST /api/v1/artifacts/interview-questions
pub async fn handle_interview_questions_artifact(
    Json(questions): Json<InterviewQuestionSet>,
) -> Result<Artifact, AppError> {
    Ok(Artifact::interview_questions(&questions)?)
}

/// POST /api/v1/artifacts/cover-letter
pub async fn handle_cover_letter_artifact(Json(request): Json<CoverLetterResponse>) -> Artifact {
    Artifact::cover_letter(&request.cover_letter)
}
