//! Error types for API requests.

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Failure modes of a single API operation.
///
/// Status codes outside an operation's accepted set surface as
/// [`ApiError::UnexpectedStatus`] rather than being retried; the caller
/// decides whether a retry at a higher level makes sense.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, TLS, request timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status the operation does not accept.
    #[error("unexpected status {status} for {method} {path}")]
    UnexpectedStatus {
        method: Method,
        path: String,
        status: StatusCode,
    },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response body from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// A base URL or request path did not form a valid URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    /// The response status, when the error carries one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            Self::Decode { .. } | Self::InvalidUrl { .. } => None,
        }
    }
}
