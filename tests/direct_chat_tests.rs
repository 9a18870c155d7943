//! Tests for the one-shot chat helper behind the `chat` binary.

use serde_json::json;
use tokio_chat_proxy::core::direct::chat_with_model;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_chat_with_model_extracts_message_content() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "model": "qwen:7b",
            "stream": false,
            "messages": [{"role": "user", "content": "Hi"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "qwen:7b",
            "message": {"role": "assistant", "content": "Hello there"},
            "done": true
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let client = reqwest::Client::new();
    let response = chat_with_model(
        &client,
        &format!("{}/api/chat", upstream.uri()),
        "Hi",
        "qwen:7b",
    )
    .await;

    assert_eq!(response, "Hello there");
}

#[tokio::test]
async fn test_chat_with_model_formats_upstream_failure() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&upstream)
        .await;

    let client = reqwest::Client::new();
    let response = chat_with_model(
        &client,
        &format!("{}/api/chat", upstream.uri()),
        "Hi",
        "qwen:7b",
    )
    .await;

    // Both channels share the string result; this is the failure shape.
    assert_eq!(response, "Error: 404 - not found");
}

#[tokio::test]
async fn test_chat_with_model_missing_content_is_empty() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
        .mount(&upstream)
        .await;

    let client = reqwest::Client::new();
    let response = chat_with_model(
        &client,
        &format!("{}/api/chat", upstream.uri()),
        "Hi",
        "qwen:7b",
    )
    .await;

    assert_eq!(response, "");
}
