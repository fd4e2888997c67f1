//! Gateway error taxonomy.
//!
//! Every handler failure flows through [`GatewayError`], so a caller always
//! gets an explicit status code and a machine-readable `{"error": ...}` body
//! instead of an empty 200.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Name store file could not be opened or read.
    #[error("name store unavailable: {0}")]
    StoreUnavailable(#[source] std::io::Error),

    /// Name store file exists but does not hold a valid JSON object.
    #[error("name store corrupt: {0}")]
    StoreCorrupt(#[source] serde_json::Error),

    /// Name store temp-file write or rename failed.
    #[error("name store write failed: {0}")]
    StoreWrite(String),

    /// Script identifier has no entry in the name store.
    #[error("no name recorded for script '{0}'")]
    NameNotFound(String),

    /// Transport-level failure talking to a downstream service.
    #[error("downstream unreachable: {0}")]
    DownstreamUnreachable(#[source] reqwest::Error),

    /// Downstream answered with a non-success status or a malformed body.
    #[error("downstream bad response: {0}")]
    DownstreamBadResponse(String),

    /// Audio artifact could not be written under the data directory.
    #[error("audio write failed: {0}")]
    AudioWrite(String),

    /// User script directory could not be read.
    #[error("script directory unreadable: {0}")]
    DirectoryRead(#[source] std::io::Error),

    /// Configuration file missing or undecodable. Startup only — never
    /// produced on a request path.
    #[error("config: {0}")]
    Config(String),
}

impl GatewayError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NameNotFound(_) => StatusCode::NOT_FOUND,
            Self::DownstreamUnreachable(_) | Self::DownstreamBadResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {self}");
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
