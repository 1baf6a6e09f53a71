#[cfg(test)]
#[path = "advice_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::IntentCategory;
use super::Language;
use super::Turn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceStatus {
    Success,
    Error,
}

/// Normalized reply rendered by the conversation view. Produced identically
/// by the remote client and the local fallback generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub status: AdviceStatus,
    pub text: String,
    pub confidence: Option<f64>,
    pub suggestions: Vec<String>,
    pub context: String,
}

impl AdviceResponse {
    pub fn from_category(category: IntentCategory, text: &str) -> AdviceResponse {
        return AdviceResponse {
            status: AdviceStatus::Success,
            text: text.to_string(),
            confidence: Some(category.confidence()),
            suggestions: category.suggestions(),
            context: category.context().to_string(),
        };
    }

    pub fn is_success(&self) -> bool {
        return self.status == AdviceStatus::Success;
    }
}

/// Chat request sent to the advice backend.
#[derive(Clone, Debug, PartialEq)]
pub struct AdviceRequest {
    pub query: String,
    pub language: Language,
    pub session_id: Option<String>,
    pub history: Vec<Turn>,
}

impl AdviceRequest {
    pub fn new(query: &str, language: Language) -> AdviceRequest {
        return AdviceRequest {
            query: query.to_string(),
            language,
            session_id: None,
            history: vec![],
        };
    }
}
