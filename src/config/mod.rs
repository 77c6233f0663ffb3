//! Configuration module for the admin client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Default request timeout when TASKBOARD_HTTP_TIMEOUT_SECS is unset.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Taskboard REST API
    pub api_url: String,
    /// Static bearer token for the API (absent in anonymous mode)
    pub api_token: Option<String>,
    /// Defensive per-request timeout
    pub http_timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = env::var("TASKBOARD_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

        let api_token = env::var("TASKBOARD_API_TOKEN").ok();

        let http_timeout = env::var("TASKBOARD_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let log_level = env::var("TASKBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_url,
            api_token,
            http_timeout,
            log_level,
        }
    }
}
