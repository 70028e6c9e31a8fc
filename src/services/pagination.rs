//! Re-pagination of the fixed upstream window into client-sized pages.
//!
//! The upstream always serves [`UPSTREAM_WINDOW`] items per page. A client
//! page of `take` items starting at `skip = (page - 1) * take` lives at
//! `offset = skip % WINDOW` inside upstream page `skip / WINDOW + 1`, and may
//! spill into the following upstream page. These helpers are pure so the
//! window arithmetic and stitching can be tested without a network.

use crate::clients::catalog::UPSTREAM_WINDOW;
use crate::domain::SortOrder;
use crate::domain::episode_code::sort_by_code;
use crate::models::Episode;
use crate::services::integration_service::IntegrationError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_TAKE: u32 = 10;
pub const MAX_TAKE: u32 = 100;

/// A client page request. `take` is expected in `1..=MAX_TAKE`, `page >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub take: u32,
    pub order: Option<SortOrder>,
    pub name: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            take: DEFAULT_TAKE,
            order: None,
            name: None,
        }
    }
}

impl PageRequest {
    /// Builds a request, rejecting a page below 1 or a take outside `1..=MAX_TAKE`.
    /// An empty name filter counts as no filter.
    pub fn new(
        page: u32,
        take: u32,
        order: Option<SortOrder>,
        name: Option<String>,
    ) -> Result<Self, IntegrationError> {
        if page < 1 {
            return Err(IntegrationError::Validation(format!(
                "Invalid page: {page}. Page must be at least 1"
            )));
        }

        if !(1..=MAX_TAKE).contains(&take) {
            return Err(IntegrationError::Validation(format!(
                "Invalid take: {take}. Take must be between 1 and {MAX_TAKE}"
            )));
        }

        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self {
            page,
            take,
            order,
            name,
        })
    }

    #[must_use]
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.take)
    }

    #[must_use]
    pub fn position(&self) -> WindowPosition {
        WindowPosition::for_skip(self.skip())
    }
}

/// Where a client page starts in upstream coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPosition {
    /// 1-based upstream page index.
    pub upstream_page: u32,
    pub offset: usize,
}

impl WindowPosition {
    #[must_use]
    pub fn for_skip(skip: u64) -> Self {
        let window = u64::from(UPSTREAM_WINDOW);
        let upstream_page = u32::try_from(skip / window + 1).unwrap_or(u32::MAX);
        // offset < WINDOW
        let offset = usize::try_from(skip % window).unwrap_or_default();

        Self {
            upstream_page,
            offset,
        }
    }
}

/// Sorts a fetched window in place when an order was requested.
pub fn sort_window(episodes: &mut [Episode], order: Option<SortOrder>) {
    if let Some(order) = order {
        sort_by_code(episodes, order, |e| e.episode.as_str());
    }
}

/// `candidates[offset..offset + take]`, clamped to what exists.
#[must_use]
pub fn take_window(candidates: &[Episode], offset: usize, take: usize) -> Vec<Episode> {
    candidates.iter().skip(offset).take(take).cloned().collect()
}

/// Completes a short page with records from the next upstream window.
///
/// Unsorted, the next window's leading records are appended in upstream
/// order. Sorted, both windows are merged and re-sorted, and the slice that
/// continues past what `provisional` already covers is appended.
#[must_use]
pub fn fill_from_next(
    current: Vec<Episode>,
    mut provisional: Vec<Episode>,
    next: Vec<Episode>,
    offset: usize,
    take: usize,
    order: Option<SortOrder>,
) -> Vec<Episode> {
    let remaining = take.saturating_sub(provisional.len());
    if remaining == 0 {
        return provisional;
    }

    match order {
        Some(_) => {
            let mut combined = current;
            combined.extend(next);
            sort_window(&mut combined, order);

            let start = offset + provisional.len();
            let end = offset + take;
            provisional.extend(
                combined
                    .into_iter()
                    .skip(start)
                    .take(end.saturating_sub(start)),
            );
        }
        None => provisional.extend(next.into_iter().take(remaining)),
    }

    provisional
}
