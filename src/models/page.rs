use serde::{Deserialize, Serialize};

/// Navigation block of an upstream list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl PageInfo {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// One fixed-size window of an upstream list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamPage<T> {
    #[serde(default)]
    pub info: PageInfo,
    #[serde(default)]
    pub results: Vec<T>,
}

/// Client-facing pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub take: u32,
    pub item_count: u32,
    pub page_count: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl PageMeta {
    #[must_use]
    pub fn new(page: u32, take: u32, item_count: u32) -> Self {
        let page_count = if take == 0 {
            0
        } else {
            item_count.div_ceil(take)
        };

        Self {
            page,
            take,
            item_count,
            page_count,
            has_previous_page: page > 1,
            has_next_page: page < page_count,
        }
    }
}

/// A client-sized page of records.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}
