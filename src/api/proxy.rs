//! Proxy endpoints
//!
//! `POST /chat` forwards or stages a request; `GET /stream` consumes the
//! staged request and relays the upstream output as server-sent events.

use crate::core::chat::{ChatOutcome, ChatRequest};
use crate::core::traits::ChatProxyService;
use crate::error::ProxyError;
use async_stream::stream;
use axum::response::Sse;
use axum::response::sse::{Event, KeepAlive};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use di_axum::Inject;
use futures_util::{Stream, StreamExt};
use log::error;
use serde_json::json;
use std::convert::Infallible;

pub fn router() -> Router {
    Router::new()
        .route("/chat", post(proxy_chat))
        .route("/stream", get(proxy_stream))
}

async fn proxy_chat(
    Inject(proxy_service): Inject<dyn ChatProxyService>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, ProxyError> {
    match proxy_service.submit(request).await? {
        ChatOutcome::Completed(body) => Ok(Json(body).into_response()),
        ChatOutcome::StreamingStaged => {
            Ok(Json(schemas::StageAck::streaming_started()).into_response())
        }
    }
}

async fn proxy_stream(
    Inject(proxy_service): Inject<dyn ChatProxyService>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ProxyError> {
    // The upstream connection is opened before the SSE response is returned,
    // so setup failures still get a normal JSON error response.
    let mut lines = proxy_service.open_relay().await?;

    let events = stream! {
        while let Some(line) = lines.next().await {
            match line {
                Ok(line) if !line.is_empty() => {
                    yield Ok(Event::default().data(line));
                }
                Ok(_) => {}
                Err(err) => {
                    // The stream is already committed; no error response can
                    // be sent anymore. Log and close.
                    error!("upstream stream failed mid-relay: {err}");
                    return;
                }
            }
        }

        yield Ok(Event::default().data(json!({"done": true}).to_string()));
    };

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

pub mod schemas {
    use serde::Serialize;

    /// Acknowledgement that a streaming request was parked server-side.
    #[derive(Serialize, Debug)]
    pub struct StageAck {
        pub status: &'static str,
    }

    impl StageAck {
        pub fn streaming_started() -> Self {
            StageAck {
                status: "streaming_started",
            }
        }
    }
}
