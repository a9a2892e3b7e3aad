//! HTTP transport abstraction.
//!
//! The status checker and the notifiers only talk to the network through
//! `HttpTransport`, so both can be exercised in tests with a fake that
//! records calls instead of hitting the lookup site or the chat API.

use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Url;

/// A JSON POST request
#[derive(Debug, Clone)]
pub struct JsonPost<'a> {
    /// Target endpoint
    pub url: &'a str,
    /// Sent as `Authorization: Bearer <token>` when present
    pub bearer_token: Option<&'a str>,
    /// Serialized as the request body with `Content-Type: application/json`
    pub body: serde_json::Value,
}

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status_code: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Minimal HTTP capability needed by a run
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GETs `url` and returns the full body as text
    ///
    /// # Errors
    /// - `AppError::Network` on transport failure or a non-2xx status
    /// - `AppError::BodyRead` if the body cannot be read to the end
    async fn get_text(&self, url: &Url) -> AppResult<String>;

    /// POSTs a JSON body and returns whatever the server answered
    ///
    /// Non-2xx statuses are returned as a reply; only transport failures are
    /// errors, so the caller can decide how to report a refusal.
    async fn post_json(&self, request: JsonPost<'_>) -> AppResult<HttpReply>;
}

/// Production transport backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_text(&self, url: &Url) -> AppResult<String> {
        let network_error = |e: reqwest::Error| AppError::Network {
            operation: "pound lookup".to_string(),
            url: url.to_string(),
            source: e.into(),
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(network_error)?
            .error_for_status()
            .map_err(network_error)?;

        response.text().await.map_err(|e| AppError::BodyRead {
            url: url.to_string(),
            source: e.into(),
        })
    }

    async fn post_json(&self, request: JsonPost<'_>) -> AppResult<HttpReply> {
        let mut builder = self
            .client
            .post(request.url)
            .header("Content-Type", "application/json")
            .json(&request.body);

        if let Some(token) = request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| AppError::Network {
            operation: "notification delivery".to_string(),
            url: request.url.to_string(),
            source: e.into(),
        })?;

        let status_code = response.status().as_u16();
        let body = response.text().await.map_err(|e| AppError::BodyRead {
            url: request.url.to_string(),
            source: e.into(),
        })?;

        Ok(HttpReply { status_code, body })
    }
}
