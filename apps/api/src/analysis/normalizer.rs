//! Response Normalizer — recovers structured results from free-text model replies.
//!
//! Models wrap JSON inconsistently: bare, inside a ```` ```json ```` fence, inside
//! an untagged fence, or with prose around it. The scanner takes the first
//! delimited span only and discards anything after its closing fence.
//! Prose-prefixed JSON with no fence is not recovered.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::errors::Failure;
use crate::llm_client::ModelReply;
use crate::models::analysis::CoverLetter;

/// Opens and closes a literal code block.
pub const FENCE: &str = "```";
/// Opening fence tagged as JSON.
pub const JSON_FENCE: &str = "```json";

/// Locates the candidate JSON payload inside `reply`.
///
/// Returns `None` when a fence is opened but never closed.
pub fn extract_payload(reply: &str) -> Option<&str> {
    let opening = if reply.contains(JSON_FENCE) {
        Some(JSON_FENCE)
    } else if reply.contains(FENCE) {
        Some(FENCE)
    } else {
        None
    };

    let Some(opening) = opening else {
        return Some(reply.trim());
    };

    let start = reply.find(opening)? + opening.len();
    let body = &reply[start..];
    let end = body.find(FENCE)?;
    Some(body[..end].trim())
}

/// Parses a structured reply strictly (no trailing commas, no comments).
///
/// The strict JSON parse decides pass or fail. The parsed value is then mapped
/// onto `T`, whose fields default when missing, `null` or mistyped; only a
/// top-level value that cannot be a record (an array, a string) is rejected.
/// On failure the original reply travels inside the error and is logged.
pub fn normalize_structured<T: DeserializeOwned>(reply: &ModelReply) -> Result<T, Failure> {
    let raw = reply.as_str();

    let result = match extract_payload(raw) {
        Some(payload) => serde_json::from_str::<Value>(payload)
            .map_err(|e| format!("invalid JSON: {e}"))
            .and_then(|value| {
                serde_json::from_value::<T>(value).map_err(|e| format!("unexpected shape: {e}"))
            }),
        None => Err("unclosed code fence".to_string()),
    };

    result.map_err(|reason| {
        warn!("Could not parse model reply ({reason}); raw reply: {raw}");
        Failure::MalformedModelOutput {
            raw: raw.to_string(),
            reason,
        }
    })
}

/// Removes every fence marker, then trims. An empty letter is returned as-is.
pub fn normalize_plain(reply: &ModelReply) -> CoverLetter {
    CoverLetter::new(reply.as_str().replace(FENCE, "").trim())
}
