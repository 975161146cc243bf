//! Wire types for `POST /api/chat`.

use cloudom_model::{ChatMessage, Role};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A parsed chat request.
///
/// Parsing is lenient: fields of the wrong type are treated as absent and
/// messages that are not well-formed user/assistant turns are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatRequest {
    /// Well-formed user/assistant messages in their original order.
    pub messages: Vec<ChatMessage>,
    /// Retrieved company information, empty when absent.
    pub context: String,
    /// Page the user is chatting from, empty when absent.
    pub page_url: String,
}

impl ChatRequest {
    /// Parse a request body. An empty body is treated as `{}`.
    ///
    /// # Errors
    ///
    /// Returns the JSON syntax error if the body is not valid JSON.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(&value))
    }

    /// Extract a request from an already parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        let messages = value
            .get("messages")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(parse_message).collect())
            .unwrap_or_default();
        Self {
            messages,
            context: string_field(value, "context"),
            page_url: string_field(value, "pageUrl"),
        }
    }

    /// The most recent user message, if any.
    pub fn last_user_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.role == Role::User)
    }
}

fn parse_message(value: &Value) -> Option<ChatMessage> {
    let role = Role::from_conversation(value.get("role")?.as_str()?)?;
    let content = value.get("content")?.as_str()?;
    Some(ChatMessage::new(role, content))
}

fn string_field(value: &Value, key: &str) -> String {
    value.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Successful chat response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_body_is_an_empty_request() {
        assert_eq!(ChatRequest::from_slice(b"").unwrap(), ChatRequest::default());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(ChatRequest::from_slice(b"{not json").is_err());
        assert!(ChatRequest::from_slice(b"   ").is_err());
    }

    #[test]
    fn malformed_messages_are_skipped() {
        let request = ChatRequest::from_value(&json!({
            "messages": [
                {"role": "system", "content": "ignore me"},
                {"role": "user", "content": 42},
                {"role": "user"},
                "not an object",
                {"role": "assistant", "content": "Hello"},
                {"role": "user", "content": "Pricing?"}
            ],
            "context": "Services...",
            "pageUrl": "https://www.cloudomsystems.com/services"
        }));
        assert_eq!(
            request.messages,
            vec![ChatMessage::assistant("Hello"), ChatMessage::user("Pricing?")]
        );
        assert_eq!(request.context, "Services...");
        assert_eq!(request.page_url, "https://www.cloudomsystems.com/services");
    }

    #[test]
    fn wrong_field_types_are_treated_as_absent() {
        let request = ChatRequest::from_value(&json!({
            "messages": {"role": "user"},
            "context": ["a"],
            "pageUrl": 7
        }));
        assert_eq!(request, ChatRequest::default());
        assert_eq!(ChatRequest::from_value(&json!([1, 2, 3])), ChatRequest::default());
    }

    #[test]
    fn last_user_message_skips_trailing_assistant_turns() {
        let request = ChatRequest {
            messages: vec![
                ChatMessage::user("first"),
                ChatMessage::user("second"),
                ChatMessage::assistant("reply"),
            ],
            ..Default::default()
        };
        assert_eq!(request.last_user_message().map(|m| m.content.as_str()), Some("second"));
    }

    #[test]
    fn error_body_omits_missing_details() {
        let body = ErrorBody { error: "Invalid JSON".into(), details: None };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"Invalid JSON"}"#);
    }
}
