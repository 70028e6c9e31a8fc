use anyhow::Context;

use crate::config::Config;
use crate::domain::SortOrder;
use crate::services::{IntegrationService, PageRequest};

pub async fn cmd_episodes(
    config: &Config,
    page: u32,
    take: u32,
    order: Option<String>,
    name: Option<String>,
) -> anyhow::Result<()> {
    let order = order
        .as_deref()
        .map(str::parse::<SortOrder>)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let request = PageRequest::new(page, take, order, name).context("Invalid page request")?;

    let service = super::build_integration_service(config)?;
    let result = service.list_episodes(&request).await?;

    let meta = result.meta;
    println!(
        "Page {}/{} ({} episodes total, {} per page)",
        meta.page, meta.page_count, meta.item_count, meta.take
    );
    println!("{:-<60}", "");

    if result.data.is_empty() {
        println!("No episodes on this page.");
    }

    for episode in &result.data {
        println!(
            "[{:>3}] {} - {} ({})",
            episode.id, episode.episode, episode.name, episode.air_date
        );
    }

    Ok(())
}
