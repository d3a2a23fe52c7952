//! Error types for the dog API client.
//!
//! # Design
//! The error taxonomy is deliberately small: either the transport failed
//! before a response arrived, or a response arrived but its body could not
//! be decoded as the requested type. Logical API failures (an `"error"`
//! status field in the body) are not errors here — they come back as
//! ordinary `ApiResponse` data for the caller to inspect.

use std::fmt;

/// Errors returned by `DogApiClient` calls.
#[derive(Debug)]
pub enum ApiError {
    /// The transport failed before a response arrived: connection refused,
    /// DNS failure, timeout expiry. Carries the underlying error unchanged.
    Transport(ureq::Error),

    /// The response body could not be decoded as the requested type.
    Json(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "transport error: {err}"),
            ApiError::Json(err) => write!(f, "invalid JSON body: {err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            ApiError::Json(err) => Some(err),
        }
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        ApiError::Transport(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Json(err)
    }
}
