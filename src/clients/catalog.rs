//! Typed access to the episode / character / location catalog.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::upstream::{UpstreamClient, UpstreamError};
use crate::models::{Character, Episode, Location, UpstreamPage};

/// Items per upstream list page. Fixed by the upstream service.
pub const UPSTREAM_WINDOW: u32 = 20;

#[derive(Clone)]
pub struct CatalogClient {
    http: Arc<dyn UpstreamClient>,
    base_url: String,
}

impl CatalogClient {
    pub fn new(http: Arc<dyn UpstreamClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn episode(&self, id: i32) -> Result<Episode, UpstreamError> {
        self.fetch(&format!("{}/episode/{}", self.base_url, id))
            .await
    }

    pub async fn character(&self, id: i32) -> Result<Character, UpstreamError> {
        self.fetch(&format!("{}/character/{}", self.base_url, id))
            .await
    }

    pub async fn location(&self, id: i32) -> Result<Location, UpstreamError> {
        self.fetch(&format!("{}/location/{}", self.base_url, id))
            .await
    }

    /// Fetches one upstream window of episodes, optionally filtered by name.
    pub async fn episodes_page(
        &self,
        page: u32,
        name: Option<&str>,
    ) -> Result<UpstreamPage<Episode>, UpstreamError> {
        self.fetch(&self.episodes_page_url(page, name)).await
    }

    #[must_use]
    pub fn episodes_page_url(&self, page: u32, name: Option<&str>) -> String {
        let mut url = format!("{}/episode?page={}", self.base_url, page);
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            url.push_str("&name=");
            url.push_str(&urlencoding::encode(name));
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let value = self.http.get_json(url).await?;
        serde_json::from_value(value).map_err(|e| UpstreamError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
