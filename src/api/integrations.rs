use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;
use tracing::{error, info};

use super::{ApiError, AppState, EpisodeListQuery};
use crate::api::validation::{page_request, validate_episode_id};
use crate::models::{Episode, EpisodeDetail, Paginated};

/// `GET /integrations/episode/{id}`
///
/// Episode with its characters and their origin / current locations.
pub async fn get_episode_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<EpisodeDetail>, ApiError> {
    validate_episode_id(id)?;
    info!(episode_id = id, "Fetching episode detail");

    let detail = state.integration.episode_detail(id).await.map_err(|e| {
        error!(episode_id = id, error = %e, "Episode detail failed");
        ApiError::from(e)
    })?;

    info!(episode_id = id, "Episode detail finished");
    Ok(Json(detail))
}

/// `GET /integrations/episodes?page&take&order&name`
pub async fn list_episodes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EpisodeListQuery>,
) -> Result<Json<Paginated<Episode>>, ApiError> {
    let request = page_request(query)?;
    info!(
        page = request.page,
        take = request.take,
        order = request.order.map(|o| o.as_str()),
        name = request.name.as_deref(),
        "Listing episodes"
    );

    let page = state.integration.list_episodes(&request).await.map_err(|e| {
        error!(page = request.page, error = %e, "Episode listing failed");
        ApiError::from(e)
    })?;

    info!(
        returned = page.data.len(),
        item_count = page.meta.item_count,
        "Episode listing finished"
    );
    Ok(Json(page))
}
