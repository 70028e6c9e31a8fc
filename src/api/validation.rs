use super::{ApiError, EpisodeListQuery};
use crate::domain::SortOrder;
use crate::services::PageRequest;
use crate::services::pagination::{DEFAULT_PAGE, DEFAULT_TAKE};

pub fn validate_episode_id(id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid episode ID: {}. ID must be a positive integer",
            id
        )));
    }
    Ok(id)
}

pub fn parse_sort_order(order: Option<&str>) -> Result<Option<SortOrder>, ApiError> {
    match order.map(str::trim).filter(|o| !o.is_empty()) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(ApiError::validation),
    }
}

pub fn page_request(query: EpisodeListQuery) -> Result<PageRequest, ApiError> {
    let order = parse_sort_order(query.order.as_deref())?;
    let request = PageRequest::new(
        query.page.unwrap_or(DEFAULT_PAGE),
        query.take.unwrap_or(DEFAULT_TAKE),
        order,
        query.name,
    )?;
    Ok(request)
}
