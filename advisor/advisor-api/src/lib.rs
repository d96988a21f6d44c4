//! The API for the advisor service
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

// --------------
// | Api Routes |
// --------------

/// The prefix of the health check route
pub const API_PREFIX: &str = "api";
/// The health check route
pub const HEALTH_ROUTE: &str = "health";
/// The route for asking the advisor a question
pub const ASK_ROUTE: &str = "ask";

// -------------
// | Api Types |
// -------------

/// A question for the advisor
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AskRequest {
    /// The user's question, any JSON value is accepted
    #[serde(default)]
    pub question: Option<Value>,
}

impl AskRequest {
    /// The question text, if the client sent a string
    pub fn question_text(&self) -> Option<&str> {
        self.question.as_ref().and_then(Value::as_str)
    }
}

/// The advisor's reply
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    /// The prompt template filled with the user's portfolio
    pub prompt: String,
    /// The advisor's answer
    pub answer: String,
}

/// The health check response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_request_question_optional() {
        let req: AskRequest = serde_json::from_str("{}").unwrap();
        assert!(req.question.is_none());

        let req: AskRequest =
            serde_json::from_str(r#"{"question":"Should I withdraw?"}"#).unwrap();
        assert_eq!(req.question_text(), Some("Should I withdraw?"));
    }

    #[test]
    fn test_ask_request_non_string_question() {
        let req: AskRequest = serde_json::from_str(r#"{"question":42}"#).unwrap();
        assert_eq!(req.question, Some(serde_json::json!(42)));
        assert_eq!(req.question_text(), None);
    }

    #[test]
    fn test_health_response_body() {
        let body = serde_json::to_value(HealthResponse::default()).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }
}
