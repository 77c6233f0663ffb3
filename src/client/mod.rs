//! HTTP plumbing shared by the role resolver and the resource controllers.
//!
//! One place knows how to attach the bearer token, validate response bodies,
//! and extract the backend's `{ message }` envelope from failures.

use std::sync::Arc;

use reqwest::{header, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::TokenProvider;
use crate::config::Config;
use crate::errors::ApiError;
use crate::models::ServerMessage;

/// Shared client for the Taskboard REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(config: &Config, tokens: Arc<dyn TokenProvider>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .expect("Invalid static HTTP client options");

        Self {
            http,
            base_url: Arc::from(config.api_url.trim_end_matches('/')),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn builder(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, ApiError> {
        let token = self.tokens.bearer_token().await?;
        Ok(self
            .http
            .request(method, self.url(path))
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json"))
    }

    /// GET a JSON resource. Query pairs are passed through as given; callers
    /// omit empty filters before reaching this point.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .builder(Method::GET, path)
            .await?
            .query(query)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// POST a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .builder(Method::POST, path)
            .await?
            .json(body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// PUT a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .builder(Method::PUT, path)
            .await?
            .json(body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// DELETE a resource.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.builder(Method::DELETE, path).await?.send().await?;
        Self::read_json(response).await
    }

    /// Turn a response into a typed value or an `ApiError`.
    ///
    /// Non-2xx bodies are probed for `{ message }`; a 2xx body must declare a
    /// JSON content type before it is parsed.
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ServerMessage>()
                .await
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            return Err(ApiError::Status { status, message });
        }

        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        if !is_json {
            return Err(ApiError::InvalidResponse(
                "Server returned a non-JSON response".to_string(),
            ));
        }

        response.json::<T>().await.map_err(ApiError::from)
    }
}
