//! Domain service for the episode integration endpoints.
//!
//! This module provides the [`IntegrationService`] trait: composite episode
//! detail resolution and client-sized episode listing over the upstream catalog.

use crate::clients::UpstreamError;
use crate::models::{Episode, EpisodeDetail, Paginated};
use crate::services::pagination::PageRequest;
use thiserror::Error;

/// Failure kinds surfaced by the integration service.
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Upstream unavailable ({url}): {message}")]
    UpstreamUnavailable { url: String, message: String },

    /// A relational reference without a usable id. Fan-out skips these and
    /// logs this error; it is never returned to callers.
    #[error("Malformed reference: '{0}'")]
    MalformedReference(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntegrationError {
    /// Maps a failure on a request-critical fetch. A 404 becomes
    /// [`IntegrationError::NotFound`] naming `resource`.
    pub fn from_upstream(err: UpstreamError, resource: impl Into<String>) -> Self {
        match err {
            UpstreamError::NotFound { .. } => Self::NotFound(resource.into()),
            other => Self::UpstreamUnavailable {
                url: other.url().to_string(),
                message: other.to_string(),
            },
        }
    }
}

#[async_trait::async_trait]
pub trait IntegrationService: Send + Sync {
    /// Fetches an episode with its characters and their locations.
    ///
    /// Characters and locations that fail to fetch are omitted.
    ///
    /// # Errors
    ///
    /// - Returns [`IntegrationError::NotFound`] if the episode does not exist upstream
    /// - Returns [`IntegrationError::UpstreamUnavailable`] if the episode fetch fails
    async fn episode_detail(&self, episode_id: i32) -> Result<EpisodeDetail, IntegrationError>;

    /// Lists episodes with a client-chosen page size and optional ordering.
    ///
    /// # Errors
    ///
    /// - Returns [`IntegrationError::NotFound`] if upstream reports no such list page
    /// - Returns [`IntegrationError::UpstreamUnavailable`] if the first window fetch fails
    async fn list_episodes(
        &self,
        request: &PageRequest,
    ) -> Result<Paginated<Episode>, IntegrationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_not_found_maps_to_not_found() {
        let err = IntegrationError::from_upstream(
            UpstreamError::NotFound {
                url: "https://api.example/episode/99".to_string(),
            },
            "Episode 99",
        );
        assert!(matches!(err, IntegrationError::NotFound(_)));
        assert_eq!(err.to_string(), "Episode 99 not found");
    }

    #[test]
    fn other_upstream_failures_are_unavailable() {
        let err = IntegrationError::from_upstream(
            UpstreamError::Transport {
                url: "https://api.example/episode?page=1".to_string(),
                message: "connection refused".to_string(),
            },
            "Episode page 1",
        );
        match err {
            IntegrationError::UpstreamUnavailable { url, message } => {
                assert_eq!(url, "https://api.example/episode?page=1");
                assert!(message.contains("connection refused"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
