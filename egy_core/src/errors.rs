//! # Error Types
//!
//! Structured error types for egy_core. A submission attempt can only fail in
//! two ways: the request never completed, or the response body was not JSON.
//! Both end up in the result viewer as `{ "error": "<message>" }`.
//!
//! ## Example
//!
//! ```rust
//! use egy_core::errors::SubmitError;
//!
//! let error = SubmitError::decode("expected value at line 1 column 1");
//! assert_eq!(error.error_code(), "DECODE_ERROR");
//! assert_eq!(error.to_descriptor()["error"], "expected value at line 1 column 1");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Result type alias for submission operations
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Failure of a single submission attempt.
///
/// Non-2xx responses are not errors: a response whose body decodes as JSON
/// is always a success at this layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SubmitError {
    /// The request could not be completed (no response)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// A response arrived but its body is not valid JSON
    #[error("Decode error: {message}")]
    Decode { message: String },
}

impl SubmitError {
    /// Create a Transport error
    pub fn transport(message: impl ToString) -> Self {
        SubmitError::Transport {
            message: message.to_string(),
        }
    }

    /// Create a Decode error
    pub fn decode(message: impl ToString) -> Self {
        SubmitError::Decode {
            message: message.to_string(),
        }
    }

    /// The bare failure text, without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            SubmitError::Transport { message } | SubmitError::Decode { message } => message,
        }
    }

    /// Uniform descriptor routed into the result viewer
    pub fn to_descriptor(&self) -> Value {
        json!({ "error": self.message() })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SubmitError::Transport { .. } => "TRANSPORT_ERROR",
            SubmitError::Decode { .. } => "DECODE_ERROR",
        }
    }
}

/// Startup configuration failures. These never reach a panel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configured API base URL is unusable
    #[error("Invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient { reason: String },
}

impl ConfigError {
    /// Create an InvalidBaseUrl error
    pub fn invalid_base_url(value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidBaseUrl {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
