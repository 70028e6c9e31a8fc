use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

fn season_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"S(\d+)E\d+").expect("Invalid regex"))
}

/// Builds season artwork URLs from episode codes.
///
/// Pure URL construction: nothing is fetched and nothing can fail.
#[derive(Debug, Clone)]
pub struct SeasonImageLocator {
    base_url: String,
}

impl SeasonImageLocator {
    #[must_use]
    pub fn new(public_url: &str) -> Self {
        Self {
            base_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    /// Season number encoded in `code`, defaulting to 1.
    #[must_use]
    pub fn season(code: &str) -> u32 {
        season_regex()
            .captures(code)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(1)
    }

    #[must_use]
    pub fn locate(&self, code: &str) -> String {
        let season = Self::season(code);
        debug!(code = %code, season, "Resolved season artwork");
        format!("{}/assets/seasons/season-{}.jpg", self.base_url, season)
    }
}
