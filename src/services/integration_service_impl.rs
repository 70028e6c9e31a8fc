//! Upstream-backed implementation of the [`IntegrationService`] trait.
//!
//! Episode detail is an N+1 fan-out: one episode, then each character, then
//! each distinct location those characters point at. Fetches within a stage run
//! through a bounded `buffered` stream so output order follows reference order,
//! and a stage starts only once the previous one has fully resolved.

use futures::stream::{self, StreamExt};
use std::future::Future;
use tracing::{debug, info, warn};

use crate::clients::{CatalogClient, UpstreamError};
use crate::config::Config;
use crate::domain::{dedupe, resolve_id};
use crate::models::{Episode, EpisodeDetail, PageMeta, Paginated};
use crate::services::image::SeasonImageLocator;
use crate::services::integration_service::{IntegrationError, IntegrationService};
use crate::services::pagination::{PageRequest, fill_from_next, sort_window, take_window};

pub struct CatalogIntegrationService {
    catalog: CatalogClient,
    images: SeasonImageLocator,
    max_concurrent_fetches: usize,
}

impl CatalogIntegrationService {
    #[must_use]
    pub fn new(
        catalog: CatalogClient,
        images: SeasonImageLocator,
        max_concurrent_fetches: usize,
    ) -> Self {
        Self {
            catalog,
            images,
            max_concurrent_fetches: max_concurrent_fetches.max(1),
        }
    }

    #[must_use]
    pub fn from_config(catalog: CatalogClient, config: &Config) -> Self {
        Self::new(
            catalog,
            SeasonImageLocator::new(&config.server.public_url),
            config.integration.max_concurrent_fetches,
        )
    }

    fn with_images(&self, mut episodes: Vec<Episode>) -> Vec<Episode> {
        for episode in &mut episodes {
            episode.image = Some(self.images.locate(&episode.episode));
        }
        episodes
    }

    /// Fetches every id, dropping the ones that fail. Order follows `ids`.
    async fn fetch_each<T, F, Fut>(&self, ids: Vec<i32>, kind: &'static str, fetch: F) -> Vec<T>
    where
        F: Fn(i32) -> Fut,
        Fut: Future<Output = Result<T, UpstreamError>>,
    {
        stream::iter(ids)
            .map(|id| {
                let request = fetch(id);
                async move { (id, request.await) }
            })
            .buffered(self.max_concurrent_fetches)
            .filter_map(|(id, result)| async move {
                match result {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!(kind, id, error = %e, "Dropping {} that failed to fetch", kind);
                        None
                    }
                }
            })
            .collect()
            .await
    }
}

/// Distinct ids behind `references`, without the ones that carry no id.
fn fetchable_ids<'a, I>(references: I, kind: &'static str) -> Vec<i32>
where
    I: IntoIterator<Item = &'a str>,
{
    let references: Vec<&str> = references.into_iter().collect();

    for reference in references.iter().filter(|r| resolve_id(r) == 0) {
        let err = IntegrationError::MalformedReference((*reference).to_string());
        warn!(kind, error = %err, "Skipping {} reference", kind);
    }

    dedupe(&references)
        .into_iter()
        .filter(|id| *id != 0)
        .collect()
}

#[async_trait::async_trait]
impl IntegrationService for CatalogIntegrationService {
    async fn episode_detail(&self, episode_id: i32) -> Result<EpisodeDetail, IntegrationError> {
        let mut episode = self
            .catalog
            .episode(episode_id)
            .await
            .map_err(|e| IntegrationError::from_upstream(e, format!("Episode {episode_id}")))?;

        let catalog = &self.catalog;

        let character_ids = fetchable_ids(episode.characters.iter().map(String::as_str), "character");
        let characters = self
            .fetch_each(character_ids, "character", move |id| catalog.character(id))
            .await;

        let location_ids = fetchable_ids(
            characters.iter().flat_map(|c| c.place_references()),
            "location",
        );
        let locations = self
            .fetch_each(location_ids, "location", move |id| catalog.location(id))
            .await;

        episode.image = Some(self.images.locate(&episode.episode));

        info!(
            episode_id,
            characters = characters.len(),
            locations = locations.len(),
            "Resolved episode detail"
        );

        Ok(EpisodeDetail {
            episode,
            characters,
            locations,
        })
    }

    async fn list_episodes(
        &self,
        request: &PageRequest,
    ) -> Result<Paginated<Episode>, IntegrationError> {
        let position = request.position();
        let take = usize::try_from(request.take).unwrap_or(usize::MAX);
        let name = request.name.as_deref();

        let first = self
            .catalog
            .episodes_page(position.upstream_page, name)
            .await
            .map_err(|e| {
                IntegrationError::from_upstream(
                    e,
                    format!("Episode page {}", position.upstream_page),
                )
            })?;

        let item_count = first.info.count;
        let has_next = first.info.has_next();

        let mut current = self.with_images(first.results);
        sort_window(&mut current, request.order);

        let mut data = take_window(&current, position.offset, take);

        if data.len() < take && has_next {
            let next_page = position.upstream_page.saturating_add(1);
            debug!(
                upstream_page = next_page,
                missing = take - data.len(),
                "Client page crosses upstream window boundary"
            );

            match self.catalog.episodes_page(next_page, name).await {
                Ok(next) => {
                    let next = self.with_images(next.results);
                    data = fill_from_next(
                        current,
                        data,
                        next,
                        position.offset,
                        take,
                        request.order,
                    );
                }
                Err(e) => {
                    warn!(
                        upstream_page = next_page,
                        error = %e,
                        "Boundary page fetch failed, returning short page"
                    );
                }
            }
        }

        Ok(Paginated {
            data,
            meta: PageMeta::new(request.page, request.take, item_count),
        })
    }
}
