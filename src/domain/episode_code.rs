//! Structured episode codes (`S01E05`) and the ordering built on them.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

use super::SortOrder;

fn code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"S(\d+)E(\d+)").expect("Invalid regex"))
}

/// Season and episode parsed from an episode code.
///
/// Unparseable codes become `(0, 0)`, which places them first when ascending
/// and last when descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct EpisodeCode {
    pub season: u32,
    pub episode: u32,
}

impl EpisodeCode {
    #[must_use]
    pub const fn new(season: u32, episode: u32) -> Self {
        Self { season, episode }
    }

    #[must_use]
    pub fn parse(code: &str) -> Self {
        code_regex()
            .captures(code)
            .and_then(|caps| {
                let season = caps.get(1)?.as_str().parse().ok()?;
                let episode = caps.get(2)?.as_str().parse().ok()?;
                Some(Self::new(season, episode))
            })
            .unwrap_or_default()
    }
}

/// Orders two episode codes by season, then episode, in the given direction.
#[must_use]
pub fn compare(a: &str, b: &str, order: SortOrder) -> Ordering {
    let ordering = EpisodeCode::parse(a).cmp(&EpisodeCode::parse(b));
    if order.is_ascending() {
        ordering
    } else {
        ordering.reverse()
    }
}

/// Stable sort of `items` by the episode code `key` extracts.
pub fn sort_by_code<T, F>(items: &mut [T], order: SortOrder, key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| compare(key(a), key(b), order));
}
