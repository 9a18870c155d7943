//! Error taxonomy for the proxy endpoints.

use axum::http::StatusCode;
use thiserror::Error;

/// Everything a proxy request can fail with.
///
/// All variants are terminal for the request that produced them; the message
/// string is the only structure the wire format carries.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// A relay call found the staging slot empty.
    #[error("No streaming request data available")]
    NoStagedRequest,

    /// The upstream call failed at the transport level.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered a non-streaming call with a non-2xx status.
    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },
}
