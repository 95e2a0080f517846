pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::document::handlers as document;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Document intake
        .route(
            "/api/v1/documents/extract",
            post(document::handle_extract).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // AI operations
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route("/api/v1/cover-letter", post(analysis::handle_cover_letter))
        .route(
            "/api/v1/interview-questions",
            post(analysis::handle_interview_questions),
        )
        // Downloads
        .route(
            "/api/v1/artifacts/analysis",
            post(analysis::handle_analysis_artifact),
        )
        .route(
            "/api/v1/artifacts/interview-questions",
            post(analysis::handle_interview_questions_artifact),
        )
        .route(
            "/api/v1/artifacts/cover-letter",
            post(analysis::handle_cover_letter_artifact),
        )
        .with_state(state)
}
