//! Reqwest-backed client for the local Ollama chat endpoint.

use crate::core::chat::ChatRequest;
use crate::error::ProxyError;
use crate::infrastructure::traits::{UpstreamClient, UpstreamLines};
use async_stream::stream;
use async_trait::async_trait;
use di::{inject, injectable};
use futures_util::StreamExt;
use serde_json::Value;
use std::env;

const DEFAULT_API_URL: &str = "http://localhost:11434/api/chat";

/// Resolves the upstream chat endpoint from the environment.
pub fn ollama_api_url() -> String {
    dotenvy::dotenv().ok();
    env::var("OLLAMA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned())
}

pub struct OllamaClient {
    client: reqwest::Client,
    api_url: String,
}

#[injectable(UpstreamClient)]
impl OllamaClient {
    #[inject]
    pub fn create() -> OllamaClient {
        OllamaClient {
            client: reqwest::Client::new(),
            api_url: ollama_api_url(),
        }
    }
}

#[async_trait]
impl UpstreamClient for OllamaClient {
    async fn chat(&self, request: &ChatRequest) -> Result<Value, ProxyError> {
        let response = self
            .client
            .post(&self.api_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyError::UpstreamStatus { status, body });
        }

        Ok(response.json().await?)
    }

    async fn chat_stream(&self, request: &ChatRequest) -> Result<UpstreamLines, ProxyError> {
        let response = self
            .client
            .post(&self.api_url)
            .json(request)
            .send()
            .await?;

        let mut chunks = response.bytes_stream();

        // Ollama streams newline-delimited JSON; chunk boundaries fall
        // anywhere, so lines are reassembled from a byte buffer.
        let lines = stream! {
            let mut buffer: Vec<u8> = Vec::new();

            while let Some(chunk) = chunks.next().await {
                match chunk {
                    Ok(chunk) => {
                        buffer.extend_from_slice(&chunk);

                        while let Some(newline) = buffer.iter().position(|&b| b == b'\n') {
                            let mut line: Vec<u8> = buffer.drain(..=newline).collect();
                            line.pop();
                            if line.last() == Some(&b'\r') {
                                line.pop();
                            }
                            yield Ok(String::from_utf8_lossy(&line).into_owned());
                        }
                    }
                    Err(err) => {
                        yield Err(ProxyError::from(err));
                        return;
                    }
                }
            }

            // Partial line left over when upstream closes without a newline.
            if !buffer.is_empty() {
                yield Ok(String::from_utf8_lossy(&buffer).into_owned());
            }
        };

        Ok(lines.boxed())
    }
}
