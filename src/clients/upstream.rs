//! Transport to the upstream REST API.
//!
//! [`UpstreamClient`] is the seam between the aggregation services and the
//! network: one GET per call, decoded JSON or a typed failure, no retries.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::IntegrationConfig;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Upstream resource not found: {url}")]
    NotFound { url: String },

    #[error("Upstream returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl UpstreamError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::NotFound { url }
            | Self::Status { url, .. }
            | Self::Transport { url, .. }
            | Self::Decode { url, .. } => url,
        }
    }

    const fn outcome(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Status { .. } => "status",
            Self::Transport { .. } => "transport",
            Self::Decode { .. } => "decode",
        }
    }
}

#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Issues a GET to a fully formed URL and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::NotFound`] on HTTP 404
    /// - [`UpstreamError::Status`] on any other non-2xx status
    /// - [`UpstreamError::Transport`] on connection failures and timeouts
    /// - [`UpstreamError::Decode`] if the body is not JSON
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, UpstreamError>;
}

/// reqwest-backed [`UpstreamClient`]. Clones share one connection pool.
#[derive(Clone)]
pub struct HttpUpstreamClient {
    client: Client,
}

impl HttpUpstreamClient {
    pub fn new(config: &IntegrationConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(&config.user_agent)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build upstream HTTP client: {e}"))?;

        Ok(Self { client })
    }

    async fn fetch(&self, url: &str) -> Result<serde_json::Value, UpstreamError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(|e| UpstreamError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, UpstreamError> {
        debug!(url = %url, "Fetching upstream resource");

        let result = self.fetch(url).await;
        let outcome = result.as_ref().map_or_else(UpstreamError::outcome, |_| "success");
        metrics::counter!("upstream_requests_total", "outcome" => outcome).increment(1);

        result
    }
}
