//! Blocking HTTP client wrapper for the dog API.
//!
//! # Design
//! `DogApiClient` holds a base URL, a timeout and a configured `ureq` agent,
//! all fixed at construction. URL building is pure string work so it can be
//! tested without a network; `get` and `post` each perform exactly one
//! blocking round-trip and return whatever the transport produced. Non-2xx
//! statuses come back as data because the external API reports logical
//! failures through the body's `status` field, not the HTTP code.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::config;
use crate::error::ApiError;
use crate::http::ApiResponse;

/// Synchronous client for the dog breed image API.
///
/// Immutable after construction; safe to reuse across any number of calls
/// since it holds no per-request state.
#[derive(Clone)]
pub struct DogApiClient {
    base_url: String,
    timeout: Duration,
    agent: ureq::Agent,
}

impl DogApiClient {
    /// Client pointed at [`config::BASE_URL`] with [`config::DEFAULT_TIMEOUT`].
    pub fn new() -> Self {
        Self::with_config(config::BASE_URL, config::DEFAULT_TIMEOUT)
    }

    /// Client with an explicit base URL and timeout.
    ///
    /// Trailing slashes on `base_url` are stripped so [`Self::build_url`]
    /// always joins with exactly one separator. No further validation
    /// happens here; a malformed URL surfaces as a transport error on the
    /// first request that uses it.
    pub fn with_config(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Join a relative path onto the stored base URL.
    ///
    /// Leading slashes on `path` are stripped and the halves are joined with
    /// a single `/`. Pure function: any string in, some string out, even if
    /// the result is not a usable URL.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue a blocking GET to `build_url(path)`.
    ///
    /// Query pairs are appended when present. The configured timeout applies
    /// to the whole round-trip. Only transport failures produce an error;
    /// any status code that reaches us comes back as an `ApiResponse`.
    pub fn get(&self, path: &str, params: Option<&[(&str, &str)]>) -> Result<ApiResponse, ApiError> {
        let url = self.build_url(path);
        let mut request = self.agent.get(&url);
        if let Some(pairs) = params {
            for (key, value) in pairs {
                request = request.query(*key, *value);
            }
        }
        read_response(request.call()?)
    }

    /// Issue a blocking POST to `build_url(path)` with an optional JSON body.
    ///
    /// The body is serialized with `serde_json` and sent as
    /// `application/json`; without a body the POST goes out empty. Same
    /// timeout and failure semantics as [`Self::get`].
    pub fn post<T: Serialize>(&self, path: &str, json: Option<&T>) -> Result<ApiResponse, ApiError> {
        let url = self.build_url(path);
        let response = match json {
            Some(payload) => {
                let body = serde_json::to_string(payload)?;
                self.agent
                    .post(&url)
                    .content_type("application/json")
                    .send(body.as_bytes())?
            }
            None => self.agent.post(&url).send_empty()?,
        };
        read_response(response)
    }
}

impl Default for DogApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DogApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DogApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Reduce the transport's response to status code plus body string.
fn read_response(mut response: ureq::http::Response<ureq::Body>) -> Result<ApiResponse, ApiError> {
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string()?;
    Ok(ApiResponse { status, body })
}
