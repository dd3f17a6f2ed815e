//! API utilities for talking to the analysis service
//!
//! URL construction, bearer headers and the error type every request
//! helper returns.

use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::config::app_config;

/// Failure of a client operation. `Display` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{detail}")]
    Http { status: u16, detail: String },

    #[error("{0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("{0}")]
    Auth(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Get the base URL for API requests
pub fn api_base() -> String {
    app_config().api_base_url.clone()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/analyze");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Maps a non-success response body to [`ApiError::Http`]
pub fn http_error(status: u16, body: &str, fallback: &str) -> ApiError {
    ApiError::Http {
        status,
        detail: ApiErrorBody::from_text(body).message_or(fallback),
    }
}

/// Decodes a JSON success body, or turns the `detail` envelope into an error
pub async fn read_json<T>(response: Response, fallback: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(http_error(status, &body, fallback));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like [`read_json`] for endpoints whose success body is ignored
pub async fn ensure_success(response: Response, fallback: &str) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(http_error(status, &body, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_prefers_detail() {
        let err = http_error(413, r#"{"detail":"File too large"}"#, "Analysis failed.");
        assert_eq!(
            err,
            ApiError::Http {
                status: 413,
                detail: "File too large".into()
            }
        );
        assert_eq!(err.to_string(), "File too large");
    }

    #[test]
    fn test_http_error_fallback() {
        let err = http_error(500, "Internal Server Error", "Chat API failed.");
        assert_eq!(err.to_string(), "Chat API failed.");
    }

    #[test]
    fn test_display_of_other_variants() {
        assert_eq!(
            ApiError::Validation("Please select a file first.".into()).to_string(),
            "Please select a file first."
        );
        assert_eq!(
            ApiError::Decode("missing field `summary`".into()).to_string(),
            "Failed to parse response: missing field `summary`"
        );
    }

    #[test]
    fn test_bearer() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
