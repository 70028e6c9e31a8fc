mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use common::{FakeUpstream, character, episode, episode_page, location, spawn_app};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app(Arc::new(FakeUpstream::default()));
    let (status, body) = get(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["message"], "online");
}

#[tokio::test]
async fn test_episode_detail_composite() {
    let upstream = Arc::new(
        FakeUpstream::default()
            .with("/episode/1", episode(1, "S01E01", &[1, 2, 7]))
            .with("/character/1", character(1, Some(1), Some(3)))
            .with("/character/2", character(2, Some(3), Some(3)))
            .failing("/character/7")
            .with("/location/1", location(1))
            .with("/location/3", location(3)),
    );
    let app = spawn_app(upstream.clone());

    let (status, body) = get(&app, "/api/integrations/episode/1").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["episode"]["id"], 1);
    assert_eq!(
        body["episode"]["image"],
        "http://localhost:3001/assets/seasons/season-1.jpg"
    );
    assert!(body["episode"].get("characters").is_none());

    let characters = body["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 2);
    assert!(characters.iter().all(|c| c.get("episode").is_none()));

    let locations: Vec<i64> = body["locations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(locations, vec![1, 3]);
    assert!(body["locations"][0].get("residents").is_none());

    let location_3_calls = upstream
        .calls()
        .iter()
        .filter(|u| u.ends_with("/location/3"))
        .count();
    assert_eq!(location_3_calls, 1);
}

#[tokio::test]
async fn test_episode_detail_skips_unknown_places() {
    let upstream = Arc::new(
        FakeUpstream::default()
            .with("/episode/5", episode(5, "S01E05", &[4]))
            .with("/character/4", character(4, None, None)),
    );
    let app = spawn_app(upstream.clone());

    let (status, body) = get(&app, "/api/integrations/episode/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["characters"].as_array().unwrap().len(), 1);
    assert!(body["locations"].as_array().unwrap().is_empty());
    assert!(!upstream.calls().iter().any(|u| u.contains("/location/")));
}

#[tokio::test]
async fn test_episode_detail_not_found() {
    let app = spawn_app(Arc::new(FakeUpstream::default()));
    let (status, body) = get(&app, "/api/integrations/episode/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Episode 999 not found");
}

#[tokio::test]
async fn test_episode_detail_upstream_down() {
    let app = spawn_app(Arc::new(FakeUpstream::default().failing("/episode/2")));
    let (status, _) = get(&app, "/api/integrations/episode/2").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_episode_detail_rejects_bad_id() {
    let app = spawn_app(Arc::new(FakeUpstream::default()));

    let (status, _) = get(&app, "/api/integrations/episode/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/api/integrations/episode/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_episodes_stitch_across_boundary() {
    let upstream = Arc::new(
        FakeUpstream::default()
            .with("/episode?page=1", episode_page(1, 20, 51, true))
            .with("/episode?page=2", episode_page(2, 20, 51, true)),
    );
    let app = spawn_app(upstream.clone());

    let (status, body) = get(&app, "/api/integrations/episodes?page=2&take=15").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(ids(&body), (16..=30).collect::<Vec<_>>());
    assert_eq!(body["meta"]["page"], 2);
    assert_eq!(body["meta"]["take"], 15);
    assert_eq!(body["meta"]["itemCount"], 51);
    assert_eq!(body["meta"]["pageCount"], 4);
    assert_eq!(body["meta"]["hasPreviousPage"], true);
    assert_eq!(body["meta"]["hasNextPage"], true);
    assert_eq!(upstream.calls().len(), 2);
}

#[tokio::test]
async fn test_episodes_default_query() {
    let upstream = Arc::new(
        FakeUpstream::default().with("/episode?page=1", episode_page(1, 20, 51, true)),
    );
    let app = spawn_app(upstream.clone());

    let (status, body) = get(&app, "/api/integrations/episodes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(body["meta"]["hasPreviousPage"], false);
    assert!(
        body["data"][0]["image"]
            .as_str()
            .unwrap()
            .ends_with("season-1.jpg")
    );
    assert_eq!(upstream.calls().len(), 1);
}

#[tokio::test]
async fn test_episodes_sorted_descending() {
    let upstream = Arc::new(
        FakeUpstream::default().with("/episode?page=1", episode_page(1, 20, 20, false)),
    );
    let app = spawn_app(upstream);

    let (status, body) = get(&app, "/api/integrations/episodes?take=5&order=DESC").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![20, 19, 18, 17, 16]);
    assert_eq!(body["data"][0]["episode"], "S02E20");
}

#[tokio::test]
async fn test_episodes_name_filter_changes_count() {
    let upstream = Arc::new(
        FakeUpstream::default().with("/episode?page=1&name=Rick", episode_page(1, 3, 3, false)),
    );
    let app = spawn_app(upstream);

    let (status, body) = get(&app, "/api/integrations/episodes?name=Rick").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["itemCount"], 3);
    assert_eq!(body["meta"]["pageCount"], 1);
    assert_eq!(body["meta"]["hasNextPage"], false);
}

#[tokio::test]
async fn test_episodes_boundary_failure_returns_short_page() {
    let upstream = Arc::new(
        FakeUpstream::default()
            .with("/episode?page=1", episode_page(1, 20, 51, true))
            .failing("/episode?page=2"),
    );
    let app = spawn_app(upstream);

    let (status, body) = get(&app, "/api/integrations/episodes?page=2&take=15").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![16, 17, 18, 19, 20]);
    assert_eq!(body["meta"]["itemCount"], 51);
}

#[tokio::test]
async fn test_episodes_first_window_failure_is_fatal() {
    let app = spawn_app(Arc::new(FakeUpstream::default().failing("/episode?page=1")));
    let (status, body) = get(&app, "/api/integrations/episodes").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_episodes_validation() {
    let app = spawn_app(Arc::new(FakeUpstream::default()));

    for uri in [
        "/api/integrations/episodes?take=0",
        "/api/integrations/episodes?take=101",
        "/api/integrations/episodes?page=0",
        "/api/integrations/episodes?order=UP",
        "/api/integrations/episodes?page=-1",
    ] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_take_never_exceeded() {
    let upstream = Arc::new(
        FakeUpstream::default()
            .with("/episode?page=1", episode_page(1, 20, 51, true))
            .with("/episode?page=2", episode_page(2, 20, 51, true))
            .with("/episode?page=3", episode_page(3, 11, 51, false)),
    );
    let app = spawn_app(upstream);

    for take in [1u32, 7, 15, 20, 33, 100] {
        for page in (1u32..=4).filter(|p| (p - 1) * take < 60) {
            let uri = format!("/api/integrations/episodes?page={page}&take={take}");
            let (status, body) = get(&app, &uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body["data"].as_array().unwrap().len() <= take as usize, "{uri}");
            assert_eq!(body["meta"]["itemCount"], 51, "{uri}");
        }
    }
}
