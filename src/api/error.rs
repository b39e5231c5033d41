//! Error types for content API calls.
//!
//! Every failure a fetch can hit collapses into [`FetchError`]; callers
//! are expected to degrade to an empty placeholder state rather than
//! propagate further up.

use thiserror::Error;

/// Errors that can occur while talking to the content API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("Request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("'{endpoint}' returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Short classification string, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Request { .. } => "request",
            FetchError::Status { .. } => "status",
            FetchError::Decode { .. } => "decode",
        }
    }

    /// HTTP status for [`FetchError::Status`], if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
