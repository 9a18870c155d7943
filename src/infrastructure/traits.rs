//! Infrastructure traits, used for DI on higher levels

use crate::core::chat::ChatRequest;
use crate::error::ProxyError;
use async_trait::async_trait;
use futures_util::stream::BoxStream;
use serde_json::Value;

/// Raw upstream output, one line per item, in arrival order.
pub type UpstreamLines = BoxStream<'static, Result<String, ProxyError>>;

#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Forwards a non-streaming request and returns the upstream body as-is.
    ///
    /// A non-2xx upstream status becomes [`ProxyError::UpstreamStatus`]
    /// carrying the status and raw body.
    async fn chat(&self, request: &ChatRequest) -> Result<Value, ProxyError>;

    /// Opens a streaming call and yields upstream output line by line.
    ///
    /// Lines are opaque to the proxy; no parsing, no schema checks. Errors
    /// while reading the body surface as `Err` items on the stream.
    async fn chat_stream(&self, request: &ChatRequest) -> Result<UpstreamLines, ProxyError>;
}
