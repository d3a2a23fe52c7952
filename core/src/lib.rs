//! Blocking API client for the dog breed image service (dog.ceo).
//!
//! # Overview
//! A thin wrapper around a synchronous HTTP transport: compose a URL from a
//! base URL and a relative path, issue a GET or POST, hand the status code
//! and body back to the caller. The wrapper imposes no response schema —
//! callers decode the body into `serde_json::Value` or one of the typed
//! envelopes in `types` as needed.
//!
//! # Design
//! - `DogApiClient` is immutable after construction and holds no per-request
//!   state, so one instance can serve any number of calls.
//! - Non-2xx statuses are ordinary responses, not errors. The external API
//!   signals logical failures through a `"status": "error"` field in the
//!   body, so status interpretation belongs to the caller.
//! - Transport failures (connection, DNS, timeout) surface unchanged inside
//!   `ApiError::Transport` — no retry, no wrapping layers, no logging.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::DogApiClient;
pub use error::ApiError;
pub use http::ApiResponse;
pub use types::{AllBreeds, Envelope, ErrorBody, RandomImage, SubBreeds};
