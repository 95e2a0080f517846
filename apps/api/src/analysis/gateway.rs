//! Model Gateway — fills the fixed prompt templates and sends them to the model.
//!
//! The credential is resolved by `Config` at startup and handed in here. Without
//! one, every operation fails with `MissingCredential` before the transport is touched.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::prompts::{
    ANALYSIS_PROMPT_TEMPLATE, COVER_LETTER_PROMPT_TEMPLATE, INTERVIEW_QUESTIONS_PROMPT_TEMPLATE,
};
use crate::errors::Failure;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION, PLAIN_TEXT_INSTRUCTION};
use crate::llm_client::{ModelReply, ModelTransport};
use crate::models::document::ExtractedText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Analysis,
    CoverLetter,
    InterviewQuestions,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Analysis => "analysis",
            Operation::CoverLetter => "cover_letter",
            Operation::InterviewQuestions => "interview_questions",
        })
    }
}

/// Stateless across calls; clones share the transport.
#[derive(Clone)]
pub struct ModelGateway {
    transport: Arc<dyn ModelTransport>,
    api_key: Option<String>,
}

impl ModelGateway {
    pub fn new(transport: Arc<dyn ModelTransport>, api_key: Option<String>) -> Self {
        Self { transport, api_key }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Requests the five-key analysis JSON object.
    pub async fn analyze_document(&self, text: &ExtractedText) -> Result<ModelReply, Failure> {
        let prompt = fill_template(
            ANALYSIS_PROMPT_TEMPLATE,
            &[("cv_text", text.as_str()), ("json_only", JSON_ONLY_INSTRUCTION)],
        );
        self.send(Operation::Analysis, &prompt).await
    }

    /// Requests a 300–400 word cover letter tailored to `job_description`.
    pub async fn draft_cover_letter(
        &self,
        text: &ExtractedText,
        job_description: &str,
    ) -> Result<ModelReply, Failure> {
        let prompt = fill_template(
            COVER_LETTER_PROMPT_TEMPLATE,
            &[
                ("cv_text", text.as_str()),
                ("job_description", job_description),
                ("plain_text_only", PLAIN_TEXT_INSTRUCTION),
            ],
        );
        self.send(Operation::CoverLetter, &prompt).await
    }

    /// Requests technical, behavioral and general question lists.
    pub async fn draft_interview_questions(
        &self,
        text: &ExtractedText,
    ) -> Result<ModelReply, Failure> {
        let prompt = fill_template(
            INTERVIEW_QUESTIONS_PROMPT_TEMPLATE,
            &[("cv_text", text.as_str()), ("json_only", JSON_ONLY_INSTRUCTION)],
        );
        self.send(Operation::InterviewQuestions, &prompt).await
    }

    async fn send(&self, operation: Operation, prompt: &str) -> Result<ModelReply, Failure> {
        let api_key = self.api_key.as_deref().ok_or(Failure::MissingCredential)?;

        info!("Sending {operation} prompt ({} chars)", prompt.len());
        self.transport
            .generate(api_key, prompt)
            .await
            .map_err(|e| {
                warn!("{operation} call failed: {e}");
                Failure::ServiceUnavailable(e.to_string())
            })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Counting transport double: replays a canned reply (or error) and records prompts.
    pub(crate) struct MockTransport {
        reply: Result<String, u16>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl MockTransport {
        pub(crate) fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn last_prompt(&self) -> Option<String> {
            self.prompts.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl ModelTransport for MockTransport {
        async fn generate(&self, _api_key: &str, prompt: &str) -> Result<ModelReply, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(ModelReply::new(text.clone())),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "Resource has been exhausted".to_string(),
                }),
            }
        }
    }

    fn cv() -> ExtractedText {
        ExtractedText::new("Jane Doe — Senior Rust Engineer, 6 years, Tokio, Axum, PostgreSQL")
    }

    #[tokio::test]
    async fn test_missing_credential_never_reaches_transport() {
        let transport = MockTransport::replying("{}");
        let gateway = ModelGateway::new(transport.clone(), None);

        assert!(matches!(
            gateway.analyze_document(&cv()).await,
            Err(Failure::MissingCredential)
        ));
        assert!(matches!(
            gateway.draft_cover_letter(&cv(), "Backend role").await,
            Err(Failure::MissingCredential)
        ));
        assert!(matches!(
            gateway.draft_interview_questions(&cv()).await,
            Err(Failure::MissingCredential)
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_becomes_service_unavailable() {
        let transport = MockTransport::failing(429);
        let gateway = ModelGateway::new(transport.clone(), Some("key".to_string()));

        let result = gateway.analyze_document(&cv()).await;
        assert!(matches!(result, Err(Failure::ServiceUnavailable(_))));
        // No retry.
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_reply_is_returned_untouched() {
        let transport = MockTransport::replying("```json\n{}\n```");
        let gateway = ModelGateway::new(transport.clone(), Some("key".to_string()));

        let reply = gateway.draft_interview_questions(&cv()).await.unwrap();
        assert_eq!(reply.as_str(), "```json\n{}\n```");
    }

    #[tokio::test]
    async fn test_analysis_prompt_embeds_cv_and_schema() {
        let transport = MockTransport::replying("{}");
        let gateway = ModelGateway::new(transport.clone(), Some("key".to_string()));

        gateway.analyze_document(&cv()).await.unwrap();
        let prompt = transport.last_prompt().unwrap();
        assert!(prompt.contains("Senior Rust Engineer"));
        assert!(prompt.contains("\"technical_skills\""));
        assert!(prompt.contains("\"overall_assessment\""));
        assert!(!prompt.contains("{cv_text}"));
    }

    #[tokio::test]
    async fn test_cover_letter_prompt_embeds_job_description() {
        let transport = MockTransport::replying("Dear team,");
        let gateway = ModelGateway::new(transport.clone(), Some("key".to_string()));

        gateway
            .draft_cover_letter(&cv(), "Platform engineer, Kubernetes")
            .await
            .unwrap();
        let prompt = transport.last_prompt().unwrap();
        assert!(prompt.contains("Platform engineer, Kubernetes"));
        assert!(prompt.contains("300 and 400 words"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[tokio::test]
    async fn test_interview_prompt_requests_three_categories() {
        let transport = MockTransport::replying("{}");
        let gateway = ModelGateway::new(transport.clone(), Some("key".to_string()));

        gateway.draft_interview_questions(&cv()).await.unwrap();
        let prompt = transport.last_prompt().unwrap();
        for key in ["technical_questions", "behavioral_questions", "general_questions"] {
            assert!(prompt.contains(key), "prompt missing {key}");
        }
        assert!(prompt.contains("at least 5"));
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::CoverLetter.to_string(), "cover_letter");
    }
}
