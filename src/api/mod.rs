use axum::{Router, http::HeaderValue, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::clients::{CatalogClient, HttpUpstreamClient, UpstreamClient};
use crate::config::Config;
use crate::services::{CatalogIntegrationService, IntegrationService};

mod error;
pub mod integrations;
mod observability;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,

    pub integration: Arc<dyn IntegrationService>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

/// Wires the integration service over an arbitrary upstream transport.
#[must_use]
pub fn create_app_state(
    config: Config,
    upstream: Arc<dyn UpstreamClient>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    let catalog = CatalogClient::new(upstream, config.integration.base_url.clone());
    let integration = Arc::new(CatalogIntegrationService::from_config(catalog, &config));

    Arc::new(AppState {
        config,
        integration,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let upstream = Arc::new(HttpUpstreamClient::new(&config.integration)?);
    Ok(create_app_state(config, upstream, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let prefix = state.config.server.prefix.trim_end_matches('/').to_string();
    let assets_path = state.config.server.assets_path.clone();
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route(
            "/integrations/episode/{id}",
            get(integrations::get_episode_detail),
        )
        .route("/integrations/episodes", get(integrations::list_episodes))
        .route("/health", get(system::health))
        .route("/metrics", get(system::get_metrics))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    let app = if prefix.is_empty() {
        Router::new().merge(api_router)
    } else {
        Router::new().nest(&prefix, api_router)
    };

    app.nest_service("/assets", ServeDir::new(assets_path))
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}
