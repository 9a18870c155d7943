//! Chat request payloads exchanged with the upstream inference API.
//!

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A chat completion request as the browser client sends it.
///
/// Only the fields the proxy routes on are typed. Everything else the client
/// includes (`options`, `system`, image attachments) is collected into
/// `extra` and forwarded to the upstream verbatim; the proxy never validates
/// `model` or `messages` beyond deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub stream: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_owned(),
            content: content.into(),
            extra: Map::new(),
        }
    }
}

/// What a submitted chat request resolved to.
#[derive(Debug)]
pub enum ChatOutcome {
    /// The upstream answered synchronously; the body is passed through as-is.
    Completed(Value),
    /// The request was parked for a follow-up relay call.
    StreamingStaged,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_are_kept() {
        let payload = json!({
            "model": "qwen:7b",
            "messages": [{"role": "user", "content": "hi"}],
            "stream": true,
            "options": {"temperature": 0.7, "top_p": 0.9},
            "system": "be brief"
        });

        let request: ChatRequest = serde_json::from_value(payload.clone()).unwrap();
        assert!(request.stream);
        assert_eq!(request.extra["options"]["top_p"], json!(0.9));
        assert_eq!(request.extra["system"], json!("be brief"));

        // What goes back out must be what came in.
        assert_eq!(serde_json::to_value(&request).unwrap(), payload);
    }

    #[test]
    fn test_stream_defaults_to_false() {
        let request: ChatRequest = serde_json::from_value(json!({
            "model": "m",
            "messages": []
        }))
        .unwrap();

        assert!(!request.stream);
    }

    #[test]
    fn test_user_message_constructor() {
        let message = ChatMessage::user("Hello");
        assert_eq!(message.role, "user");
        assert_eq!(message.content, "Hello");
        assert!(message.extra.is_empty());
    }
}
