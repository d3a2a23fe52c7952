//! Plain-data view of an HTTP response.
//!
//! # Design
//! The client reads the full body eagerly and reduces the transport's
//! response to a status code plus the raw body string. No schema is imposed
//! at this layer; callers decode on demand with [`ApiResponse::json`] or
//! inspect `body` directly.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// An HTTP response reduced to plain data.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(ApiError::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_decodes_body() {
        let response = ApiResponse {
            status: 200,
            body: r#"{"message":"https://example.com/dog.jpg","status":"success"}"#.to_string(),
        };
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["status"], "success");
    }

    #[test]
    fn json_rejects_non_json_body() {
        let response = ApiResponse {
            status: 200,
            body: "not json".to_string(),
        };
        let err = response.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }

    #[test]
    fn is_success_covers_2xx_only() {
        let mut response = ApiResponse {
            status: 200,
            body: String::new(),
        };
        assert!(response.is_success());
        response.status = 204;
        assert!(response.is_success());
        response.status = 404;
        assert!(!response.is_success());
        response.status = 500;
        assert!(!response.is_success());
    }
}
