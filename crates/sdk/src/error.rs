//! Error types for the Exa SDK.

use serde_json::Value;

/// Result type for SDK operations.
pub type ExaResult<T> = Result<T, ExaError>;

/// Error types that can occur when calling the Exa API.
#[derive(Debug, thiserror::Error)]
pub enum ExaError {
    /// The request never produced a response (connect failure, timeout, ...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Api {
        status: u16,
        /// Parsed body; non-JSON text is kept as a JSON string.
        body: Option<Value>,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ExaError {
    /// Create an API error from a status code and raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let body = if body.trim().is_empty() {
            None
        } else {
            Some(
                serde_json::from_str::<Value>(body)
                    .unwrap_or_else(|_| Value::String(body.to_string())),
            )
        };
        Self::Api { status, body }
    }

    /// True for failures of the remote call itself, with or without a response.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. })
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response body, if one was received.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}
