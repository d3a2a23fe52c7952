//! Typed views of the dog API's response bodies.
//!
//! # Design
//! Every endpoint wraps its payload in `{"message": ..., "status": ...}`;
//! only the type of `message` varies. `Envelope<T>` captures the wrapper
//! once and the aliases below name the three shapes the tests care about.
//! These types are a convenience, not a contract — `ApiResponse::json` will
//! happily decode into `serde_json::Value` for callers that want the raw
//! structure.

use std::collections::BTreeMap;

use serde::Deserialize;

/// The `{"message": ..., "status": ...}` wrapper every endpoint returns.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub message: T,
    pub status: String,
}

/// `GET /breeds/image/random` — `message` is a single image URL.
pub type RandomImage = Envelope<String>;

/// `GET /breeds/list/all` — `message` maps breed names to sub-breed lists.
pub type AllBreeds = Envelope<BTreeMap<String, Vec<String>>>;

/// `GET /breed/{breed}/list` — `message` is a list of sub-breed names.
pub type SubBreeds = Envelope<Vec<String>>;

/// Error payload returned for unknown breeds. `code` is optional because the
/// API does not include it on every error response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub code: Option<u16>,
}
