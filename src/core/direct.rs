//! One-shot chat call used by the `chat` binary.

use crate::core::chat::{ChatMessage, ChatRequest};
use serde_json::{Map, Value};

pub const DEFAULT_MODEL: &str = "qwen:7b";

/// Sends a single non-streaming chat request and returns the assistant reply.
///
/// The returned string doubles as the error channel: a non-success response
/// comes back as `Error: <status> - <body>`, and transport or decode
/// failures are formatted the same way. Callers print the result either way.
pub async fn chat_with_model(
    client: &reqwest::Client,
    api_url: &str,
    prompt: &str,
    model: &str,
) -> String {
    let request = ChatRequest {
        model: model.to_owned(),
        messages: vec![ChatMessage::user(prompt)],
        stream: false,
        extra: Map::new(),
    };

    let response = match client.post(api_url).json(&request).send().await {
        Ok(response) => response,
        Err(err) => return format!("Error: {err}"),
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return format!("Error: {} - {}", status.as_u16(), body);
    }

    match response.json::<Value>().await {
        Ok(body) => body["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_owned(),
        Err(err) => format!("Error: {err}"),
    }
}
