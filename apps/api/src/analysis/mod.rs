// CV analysis: strengths/weaknesses report, cover letter, interview questions.
// All model calls go through the gateway; replies pass through the normalizer.

pub mod artifacts;
pub mod gateway;
pub mod handlers;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
