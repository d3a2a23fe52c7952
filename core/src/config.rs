//! Process-wide client defaults.
//!
//! Compile-time constants with no runtime override mechanism. Callers that
//! need a different endpoint or timeout construct the client through
//! `DogApiClient::with_config` instead.

use std::time::Duration;

/// Base URL all relative request paths are resolved against.
pub const BASE_URL: &str = "https://dog.ceo/api";

/// Timeout applied to every request issued by a default-constructed client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
