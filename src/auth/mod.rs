//! Bearer token acquisition.
//!
//! The identity provider owns token issuance; this module is the seam the
//! rest of the crate sees. Every request asks for a fresh token, since
//! provider tokens are short-lived.

use async_trait::async_trait;

use crate::errors::ApiError;

/// Source of bearer tokens for API requests.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Produce a bearer token for the next request.
    async fn bearer_token(&self) -> Result<String, ApiError>;
}

/// Token provider backed by a fixed token from configuration.
///
/// Used by the CLI driver, where the operator supplies a long-lived API
/// token instead of an interactive identity-provider session.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<String, ApiError> {
        if self.token.is_empty() {
            return Err(ApiError::Token("No API token configured".to_string()));
        }
        Ok(self.token.clone())
    }
}
