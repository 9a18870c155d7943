//! Streaming chat proxy for a local Ollama server
//!
//! (c) Softlandia 2025

use tokio_chat_proxy::api;
use tokio_chat_proxy::core::services::MyChatProxyService;
use tokio_chat_proxy::core::staging::StagingSlot;
use tokio_chat_proxy::infrastructure::upstream::OllamaClient;

use axum::Router;
use axum::http::Method;
use di::{Injectable, ServiceCollection};
use di_axum::RouterServiceProviderExtensions;
use log::info;
use std::env;
use std::str::FromStr;
use tokio::runtime::{Builder, Runtime};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(web_server_task());

    Ok(())
}

async fn web_server_task() {
    dotenvy::dotenv().ok();

    let provider = ServiceCollection::new()
        .add(StagingSlot::singleton())
        .add(OllamaClient::singleton())
        .add(MyChatProxyService::scoped())
        .build_provider()
        .unwrap();

    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| ".".to_owned());
    let port = env::var("PORT")
        .ok()
        .and_then(|s| u16::from_str(&s).ok())
        .unwrap_or(8080);

    // build our application with a route; anything the proxy routes don't
    // match is served from the static directory, `/` resolving to index.html
    let app = Router::new()
        .nest("/proxy", api::proxy::router())
        .fallback_service(ServiceBuilder::new().service(ServeDir::new(static_dir)))
        .layer(
            CorsLayer::new()
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_origin(Any),
        )
        .with_provider(provider);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap();
    info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
    info!("Shutting down...");
}
