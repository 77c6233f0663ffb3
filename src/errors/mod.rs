//! Error handling module for the admin client.
//!
//! Provides a centralized error type for everything that can go wrong between
//! building a request and parsing the server's answer.

use reqwest::StatusCode;

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const STATUS_ERROR: &str = "STATUS_ERROR";
    pub const INVALID_RESPONSE: &str = "INVALID_RESPONSE";
    pub const TOKEN_ERROR: &str = "TOKEN_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
}

/// Client-side API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Network/transport failure before a response was obtained
    Transport(String),
    /// Non-success HTTP status, with the server-provided or fallback message
    Status { status: StatusCode, message: String },
    /// Success status but a malformed or non-JSON body
    InvalidResponse(String),
    /// The token provider could not produce a bearer token
    Token(String),
    /// A mutation payload was rejected before any request was issued
    Validation(String),
}

impl ApiError {
    /// Get the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server refused the request with 403.
    pub fn is_permission_denied(&self) -> bool {
        self.status() == Some(StatusCode::FORBIDDEN)
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => codes::TRANSPORT_ERROR,
            ApiError::Status { .. } => codes::STATUS_ERROR,
            ApiError::InvalidResponse(_) => codes::INVALID_RESPONSE,
            ApiError::Token(_) => codes::TOKEN_ERROR,
            ApiError::Validation(_) => codes::VALIDATION_ERROR,
        }
    }

    /// Get the human-readable message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Transport(msg) => msg.clone(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::InvalidResponse(msg) => msg.clone(),
            ApiError::Token(msg) => msg.clone(),
            ApiError::Validation(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::error!("Response decode error: {:?}", err);
            ApiError::InvalidResponse(format!("Invalid response body: {}", err))
        } else {
            tracing::error!("Transport error: {:?}", err);
            ApiError::Transport(format!("Request failed: {}", err))
        }
    }
}
