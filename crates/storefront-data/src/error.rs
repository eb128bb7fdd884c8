//! HTTP client error types.

use thiserror::Error;

/// Longest response body excerpt kept in an [`FetchError::HttpError`].
const MAX_ERROR_BODY: usize = 200;

/// Errors that can occur when talking to the storefront API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Failed to send the request or read the response.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// Build an HTTP error from a status and (possibly long) body.
    pub fn http(status: u16, body: &str) -> Self {
        let mut message: String = body.trim().chars().take(MAX_ERROR_BODY).collect();
        if message.is_empty() {
            message = "empty response".to_string();
        }
        FetchError::HttpError { status, message }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::ParseError(e.to_string())
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::ParseError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_truncates_body() {
        let body = "x".repeat(1000);
        match FetchError::http(502, &body) {
            FetchError::HttpError { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message.len(), MAX_ERROR_BODY);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_error_empty_body() {
        let err = FetchError::http(500, "  ");
        assert_eq!(err.to_string(), "HTTP 500: empty response");
    }
}
