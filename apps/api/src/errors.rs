use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The four failure kinds that may cross a component boundary.
///
/// Extractor, gateway and normalizer convert every internal error into one of
/// these before returning. Each is scoped to the single triggered operation.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("Unsupported or unreadable document: {0}")]
    UnsupportedOrUnreadable(String),

    #[error("No model API credential configured")]
    MissingCredential,

    #[error("Model service unavailable: {0}")]
    ServiceUnavailable(String),

    /// `raw` is the untouched model reply, kept for operator inspection only.
    #[error("Malformed model output: {reason}")]
    MalformedModelOutput { raw: String, reason: String },
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Failure(#[from] Failure),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Rejected multipart body; carries its own status (413 over the upload limit).
    #[error("Upload error: {0}")]
    Upload(#[from] MultipartError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Upload(e) => {
                let status = e.status();
                tracing::warn!("Upload rejected ({status}): {e}");
                let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "PAYLOAD_TOO_LARGE"
                } else {
                    "INVALID_UPLOAD"
                };
                (status, code, e.body_text())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                )
            }
            AppError::Failure(Failure::UnsupportedOrUnreadable(detail)) => {
                tracing::warn!("Document rejected: {detail}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UNREADABLE_DOCUMENT",
                    "Could not read the file. Please upload a valid PDF or TXT document."
                        .to_string(),
                )
            }
            AppError::Failure(Failure::MissingCredential) => {
                tracing::error!("Model API credential is missing; set MODEL_API_KEY");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    "The analysis service is currently unavailable".to_string(),
                )
            }
            AppError::Failure(Failure::ServiceUnavailable(detail)) => {
                tracing::error!("Model service error: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_SERVICE_ERROR",
                    "The AI service could not complete the request. Please try again.".to_string(),
                )
            }
            AppError::Failure(Failure::MalformedModelOutput { raw, reason }) => {
                tracing::error!("Malformed model output: {reason}");
                tracing::debug!("Raw model reply ({} bytes): {raw}", raw.len());
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_MODEL_OUTPUT",
                    "An AI processing error occurred. Please try again.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_per_failure_kind() {
        let cases = [
            (
                AppError::Failure(Failure::UnsupportedOrUnreadable("cv.docx".into())),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::Failure(Failure::MissingCredential),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::Failure(Failure::ServiceUnavailable("quota".into())),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Failure(Failure::MalformedModelOutput {
                    raw: "oops".into(),
                    reason: "eof".into(),
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (AppError::Validation("empty".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Internal(anyhow::anyhow!("serializer failed")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn test_malformed_output_never_leaks_raw_reply() {
        let error = AppError::Failure(Failure::MalformedModelOutput {
            raw: "SECRET-RAW-REPLY".into(),
            reason: "expected value".into(),
        });
        let response = error.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(!body.contains("SECRET-RAW-REPLY"));
        assert!(body.contains("MALFORMED_MODEL_OUTPUT"));
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response =
            AppError::Internal(anyhow::anyhow!("key must be a string")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("INTERNAL_ERROR"));
        assert!(!body.contains("key must be a string"));
    }

    #[test]
    fn test_failure_converts_into_app_error() {
        let error: AppError = Failure::MissingCredential.into();
        assert!(matches!(error, AppError::Failure(Failure::MissingCredential)));
    }
}
