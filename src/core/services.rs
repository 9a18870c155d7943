//! Implementations for the service the app needs.
//!

use crate::core::chat::{ChatOutcome, ChatRequest};
use crate::core::staging::StagingSlot;
use crate::core::traits::ChatProxyService;
use crate::error::ProxyError;
use crate::infrastructure::traits::{UpstreamClient, UpstreamLines};
use async_trait::async_trait;
use di::{Ref, injectable};
use log::{debug, info};

#[injectable(ChatProxyService)]
pub struct MyChatProxyService {
    upstream: Ref<dyn UpstreamClient>,
    staging: Ref<StagingSlot>,
}

#[async_trait]
impl ChatProxyService for MyChatProxyService {
    async fn submit(&self, request: ChatRequest) -> Result<ChatOutcome, ProxyError> {
        if request.stream {
            debug!("staging streaming request for model {}", request.model);
            self.staging.stage(request).await;
            Ok(ChatOutcome::StreamingStaged)
        } else {
            let response = self.upstream.chat(&request).await?;
            Ok(ChatOutcome::Completed(response))
        }
    }

    async fn open_relay(&self) -> Result<UpstreamLines, ProxyError> {
        let request = self
            .staging
            .take()
            .await
            .ok_or(ProxyError::NoStagedRequest)?;

        info!("relaying staged request for model {}", request.model);
        self.upstream.chat_stream(&request).await
    }
}
