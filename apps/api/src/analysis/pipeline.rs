//! Pipeline — gateway call followed by normalization, one function per user action.

use tracing::{info, warn};

use crate::analysis::gateway::ModelGateway;
use crate::analysis::normalizer::{normalize_plain, normalize_structured};
use crate::errors::Failure;
use crate::models::analysis::{AnalysisResult, CoverLetter};
use crate::models::document::ExtractedText;
use crate::models::interview::InterviewQuestionSet;

pub async fn analyze_cv(
    gateway: &ModelGateway,
    text: &ExtractedText,
) -> Result<AnalysisResult, Failure> {
    let reply = gateway.analyze_document(text).await?;
    let analysis: AnalysisResult = normalize_structured(&reply)?;
    info!(
        "Analysis ready: {} strengths, {} weaknesses, {} skills",
        analysis.strengths.len(),
        analysis.weaknesses.len(),
        analysis.technical_skills.len()
    );
    Ok(analysis)
}

/// An empty letter is a valid outcome ("nothing generated"), not a failure.
pub async fn generate_cover_letter(
    gateway: &ModelGateway,
    text: &ExtractedText,
    job_description: &str,
) -> Result<CoverLetter, Failure> {
    let reply = gateway.draft_cover_letter(text, job_description).await?;
    let letter = normalize_plain(&reply);
    if letter.is_empty() {
        warn!("Model returned an empty cover letter");
    } else {
        info!("Cover letter ready: {} chars", letter.as_str().len());
    }
    Ok(letter)
}

pub async fn generate_interview_questions(
    gateway: &ModelGateway,
    text: &ExtractedText,
) -> Result<InterviewQuestionSet, Failure> {
    let reply = gateway.draft_interview_questions(text).await?;
    let questions: InterviewQuestionSet = normalize_structured(&reply)?;
    info!("Interview questions ready: {} total", questions.total());
    Ok(questions)
}
