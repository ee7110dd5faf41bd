//! Error types for calls to the explorer service.

use thiserror::Error;

/// Errors that can occur while talking to the explorer service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Base URL or endpoint path could not be turned into a URL
    #[error("Invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request never produced a response (connect, timeout, TLS, ...)
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a non-success status
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },

    /// Response body was not valid JSON
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Get error type string for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Transport { .. } => "transport_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        let err = ApiError::Status {
            endpoint: "GET /search/news/rust".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "GET /search/news/rust returned status 503");
        assert_eq!(err.error_type(), "status_error");
    }
}
