use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::lenient;

/// One interview question and why it is worth asking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewQuestion {
    #[serde(deserialize_with = "lenient::string")]
    pub question: String,
    #[serde(deserialize_with = "lenient::string")]
    pub purpose: String,
}

/// Interview questions grouped by category. Counts are not validated.
///
/// A category that is `null` or not a list is empty; list entries that are not
/// objects are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewQuestionSet {
    #[serde(deserialize_with = "lenient::list")]
    pub technical_questions: Vec<InterviewQuestion>,
    #[serde(deserialize_with = "lenient::list")]
    pub behavioral_questions: Vec<InterviewQuestion>,
    #[serde(deserialize_with = "lenient::list")]
    pub general_questions: Vec<InterviewQuestion>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InterviewQuestionSet {
    pub fn total(&self) -> usize {
        self.technical_questions.len() + self.behavioral_questions.len() + self.general_questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_question_set_deserializes() {
        let json = r#"{
            "technical_questions": [
                {"question": "Explain ownership in Rust", "purpose": "Language depth"},
                {"question": "How do you profile a service?"}
            ]
        }"#;
        let set: InterviewQuestionSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.technical_questions.len(), 2);
        assert_eq!(set.technical_questions[1].purpose, "");
        assert!(set.behavioral_questions.is_empty());
        assert_eq!(set.total(), 2);
    }

    #[test]
    fn test_null_and_mistyped_categories_default() {
        let json = r#"{
            "technical_questions": null,
            "behavioral_questions": "Tell me about a conflict",
            "general_questions": [
                {"question": null, "purpose": "Motivation"},
                "Why this role?",
                {"question": "Where do you see yourself in five years?", "purpose": 5}
            ]
        }"#;
        let set: InterviewQuestionSet = serde_json::from_str(json).unwrap();
        assert!(set.technical_questions.is_empty());
        assert!(set.behavioral_questions.is_empty());
        assert_eq!(set.general_questions.len(), 2);
        assert_eq!(set.general_questions[0].question, "");
        assert_eq!(set.general_questions[0].purpose, "Motivation");
        assert_eq!(set.general_questions[1].purpose, "");
        assert!(set.extra.is_empty());
    }
}
