//! Error types for the Circle client

use crate::types::enums::ErrorDetailKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Circle operations
pub type Result<T> = std::result::Result<T, CircleError>;

/// Main error type for Circle operations
#[derive(Error, Debug)]
pub enum CircleError {
    /// Client construction failed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A call option rejected its argument
    #[error("Invalid call option: {message}")]
    InvalidOption { message: String },

    /// Request input could not be encoded
    #[error("Invalid input data: {message}")]
    InvalidInput { message: String },

    /// No response was obtained from the service
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service rejected the request with a structured error body
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body could not be decoded into the expected shape
    #[error("Malformed response ({status}): {reason}")]
    MalformedResponse {
        status: String,
        reason: String,
        body: String,
    },
}

impl CircleError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid call option error
    pub fn invalid_option(message: impl Into<String>) -> Self {
        Self::InvalidOption {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed_response(
        status: impl Into<String>,
        reason: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::MalformedResponse {
            status: status.into(),
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// HTTP status code observed for this error, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => err.http_status,
            Self::MalformedResponse { status, .. } => status
                .split_whitespace()
                .next()
                .and_then(|code| code.parse().ok()),
            _ => None,
        }
    }

    /// Structured API error, if the service returned one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether repeating the call (with the same idempotency key) may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Api(err) => matches!(err.http_status, Some(429) | Some(500..=599)),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for CircleError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_input(err.to_string())
    }
}

/// Failure to obtain a response from the service
#[derive(Error, Debug)]
pub enum TransportError {
    /// DNS, connection, TLS or timeout failure reported by the HTTP client
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The call context was canceled before a response arrived
    #[error("request canceled")]
    Canceled,

    /// The call context deadline passed before a response arrived
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

impl TransportError {
    /// Whether the failure was a timeout, either of the client or of the call context
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Http(err) => err.is_timeout(),
            Self::DeadlineExceeded => true,
            Self::Canceled => false,
        }
    }
}

/// Error details for unsuccessful API requests.
///
/// Decoded from the body of any non-2xx response:
/// `{"code": 2, "message": "...", "errors": [...]}`.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// General error type
    #[serde(default)]
    pub code: i64,
    /// Human-friendly message
    #[serde(default)]
    pub message: String,
    /// Field-level violations
    #[serde(rename = "errors", default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
    /// HTTP status the error was received with
    #[serde(skip)]
    pub http_status: Option<u16>,
}

impl ApiError {
    /// Create an API error with a code and message
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
            http_status: None,
        }
    }
}

/// A single field-level violation reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Type of the error
    #[serde(rename = "error", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorDetailKind>,
    /// Human-friendly message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Period-separated path to the offending property, e.g. `address.billingCountry`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Value of the property at `location`, as received by the server
    #[serde(
        rename = "invalidValue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub invalid_value: Option<serde_json::Value>,
    /// Constraints the value violated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ErrorConstraints>,
}

/// Constraints attached to an [`ErrorDetail`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorConstraints {
    /// Lower bound for `min_value` errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<serde_json::Value>,
    /// Upper bound for `max_value` errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<serde_json::Value>,
    /// Whether the bound is inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
    /// Expected pattern for `pattern_mismatch` errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Integral digit limit for `number_format` errors
    #[serde(
        rename = "max-integral-digits",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_integral_digits: Option<u32>,
    /// Fractional digit limit for `number_format` errors
    #[serde(
        rename = "max-fractional-digits",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_fractional_digits: Option<u32>,
}
