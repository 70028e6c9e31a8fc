mod episode;
mod episodes;

pub use episode::cmd_episode;
pub use episodes::cmd_episodes;

use std::sync::Arc;

use crate::clients::{CatalogClient, HttpUpstreamClient};
use crate::config::Config;
use crate::services::CatalogIntegrationService;

fn build_integration_service(config: &Config) -> anyhow::Result<CatalogIntegrationService> {
    let upstream = Arc::new(HttpUpstreamClient::new(&config.integration)?);
    let catalog = CatalogClient::new(upstream, config.integration.base_url.clone());
    Ok(CatalogIntegrationService::from_config(catalog, config))
}
