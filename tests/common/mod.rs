//! In-memory upstream catalog for driving the router without a network.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use multiverse::clients::{UpstreamClient, UpstreamError};
use multiverse::config::Config;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub const BASE: &str = "https://upstream.test/api";
pub const WINDOW: u32 = 20;

#[derive(Default)]
pub struct FakeUpstream {
    responses: HashMap<String, Value>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeUpstream {
    pub fn with(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(format!("{BASE}{path}"), body);
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(format!("{BASE}{path}"));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamClient for FakeUpstream {
    async fn get_json(&self, url: &str) -> Result<Value, UpstreamError> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.failing.contains(url) {
            return Err(UpstreamError::Transport {
                url: url.to_string(),
                message: "connection reset".to_string(),
            });
        }
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| UpstreamError::NotFound {
                url: url.to_string(),
            })
    }
}

pub fn spawn_app(upstream: Arc<FakeUpstream>) -> Router {
    let mut config = Config::default();
    config.integration.base_url = BASE.to_string();
    config.server.public_url = "http://localhost:3001".to_string();

    let state = multiverse::api::create_app_state(config, upstream, None);
    multiverse::api::router(state)
}

pub fn episode(id: u32, code: &str, characters: &[u32]) -> Value {
    json!({
        "id": id,
        "name": format!("Episode {id}"),
        "air_date": "December 2, 2013",
        "episode": code,
        "characters": characters
            .iter()
            .map(|c| format!("{BASE}/character/{c}"))
            .collect::<Vec<_>>(),
        "url": format!("{BASE}/episode/{id}"),
        "created": "2017-11-10T12:56:33.798Z"
    })
}

pub fn character(id: u32, origin: Option<u32>, location: Option<u32>) -> Value {
    let place = |loc: Option<u32>| match loc {
        Some(l) => json!({"name": format!("Location {l}"), "url": format!("{BASE}/location/{l}")}),
        None => json!({"name": "unknown", "url": ""}),
    };

    json!({
        "id": id,
        "name": format!("Character {id}"),
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Female",
        "origin": place(origin),
        "location": place(location),
        "image": format!("{BASE}/character/avatar/{id}.jpeg"),
        "episode": [format!("{BASE}/episode/1")],
        "url": format!("{BASE}/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

pub fn location(id: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Location {id}"),
        "type": "Planet",
        "dimension": "Dimension C-137",
        "residents": [format!("{BASE}/character/1")],
        "url": format!("{BASE}/location/{id}"),
        "created": "2017-11-10T12:42:04.162Z"
    })
}

/// Upstream list window `page` of a catalog whose ids and codes ascend together.
pub fn episode_page(page: u32, len: u32, count: u32, has_next: bool) -> Value {
    let first = (page - 1) * WINDOW + 1;
    let results: Vec<Value> = (first..first + len)
        .map(|id| episode(id, &format!("S{:02}E{:02}", (id - 1) / 11 + 1, id), &[]))
        .collect();

    json!({
        "info": {
            "count": count,
            "pages": count.div_ceil(WINDOW),
            "next": has_next.then(|| format!("{BASE}/episode?page={}", page + 1)),
            "prev": (page > 1).then(|| format!("{BASE}/episode?page={}", page - 1))
        },
        "results": results
    })
}
