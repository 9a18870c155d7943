//! DI "Interfaces"

use crate::core::chat::{ChatOutcome, ChatRequest};
use crate::error::ProxyError;
use crate::infrastructure::traits::UpstreamLines;
use async_trait::async_trait;

#[async_trait]
pub trait ChatProxyService: Send + Sync {
    /// Handles one submitted chat request.
    ///
    /// Non-streaming requests are forwarded upstream synchronously and the
    /// upstream body comes back verbatim. Streaming requests are parked in
    /// the staging slot instead, to be consumed by a later relay call.
    async fn submit(&self, request: ChatRequest) -> Result<ChatOutcome, ProxyError>;

    /// Consumes the staged request and opens the upstream stream for it.
    ///
    /// Returns [`ProxyError::NoStagedRequest`] if nothing was staged;
    /// upstream is not contacted in that case.
    async fn open_relay(&self) -> Result<UpstreamLines, ProxyError>;
}
