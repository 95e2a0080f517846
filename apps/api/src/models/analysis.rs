use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::lenient;

/// Structured CV analysis as returned by the model.
///
/// Every field defaults when the model omits it, sends `null` or sends the
/// wrong shape; unrecognised keys are kept in `extra` so a downloaded artifact
/// matches what the model produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "lenient::list")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub weaknesses: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub technical_skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub overall_assessment: String,
    #[serde(deserialize_with = "lenient::list")]
    pub recommendations: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A generated cover letter. Empty means nothing was generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverLetter(String);

impl CoverLetter {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
