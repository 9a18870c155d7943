//! Shared slot holding the request a relay call will consume.

use crate::core::chat::ChatRequest;
use di::{inject, injectable};
use log::warn;
use tokio::sync::Mutex;

/// Holds at most one chat request between the staging call that parks it and
/// the relay call that consumes it.
///
/// Registered as a singleton so both endpoint handlers see the same slot.
/// Last writer wins: staging over an unconsumed request discards it.
pub struct StagingSlot {
    slot: Mutex<Option<ChatRequest>>,
}

#[injectable]
impl StagingSlot {
    #[inject]
    pub fn create() -> StagingSlot {
        StagingSlot {
            slot: Mutex::new(None),
        }
    }
}

impl StagingSlot {
    /// Parks a request for the next relay call, overwriting any unconsumed one.
    pub async fn stage(&self, request: ChatRequest) {
        let mut slot = self.slot.lock().await;
        if slot.is_some() {
            warn!("staging a new request over an unconsumed one; the old request is dropped");
        }
        *slot = Some(request);
    }

    /// Takes the staged request, leaving the slot empty either way.
    pub async fn take(&self) -> Option<ChatRequest> {
        self.slot.lock().await.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chat::ChatMessage;
    use serde_json::Map;

    fn request(model: &str) -> ChatRequest {
        ChatRequest {
            model: model.to_owned(),
            messages: vec![ChatMessage::user("hi")],
            stream: true,
            extra: Map::new(),
        }
    }

    #[tokio::test]
    async fn test_take_empties_the_slot() {
        let staging = StagingSlot::create();
        staging.stage(request("m")).await;

        assert!(staging.take().await.is_some());
        assert!(staging.take().await.is_none());
    }

    #[tokio::test]
    async fn test_take_on_empty_slot_is_none() {
        let staging = StagingSlot::create();
        assert!(staging.take().await.is_none());
    }

    #[tokio::test]
    async fn test_second_stage_overwrites_the_first() {
        let staging = StagingSlot::create();
        staging.stage(request("first")).await;
        staging.stage(request("second")).await;

        let staged = staging.take().await.unwrap();
        assert_eq!(staged.model, "second");
        assert!(staging.take().await.is_none());
    }
}
