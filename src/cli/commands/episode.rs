use crate::config::Config;
use crate::services::IntegrationService;

pub async fn cmd_episode(config: &Config, id: i32) -> anyhow::Result<()> {
    if id <= 0 {
        anyhow::bail!("Invalid episode ID: {id}. ID must be a positive integer");
    }

    let service = super::build_integration_service(config)?;
    let detail = service.episode_detail(id).await?;

    let episode = &detail.episode;
    println!("{} - {}", episode.episode, episode.name);
    println!("{:-<60}", "");
    println!("Aired:  {}", episode.air_date);
    if let Some(image) = &episode.image {
        println!("Image:  {image}");
    }

    println!();
    println!("Characters ({}):", detail.characters.len());
    for character in &detail.characters {
        println!(
            "  [{}] {} ({}, {})",
            character.id, character.name, character.species, character.status
        );
    }

    println!();
    println!("Locations ({}):", detail.locations.len());
    for location in &detail.locations {
        println!(
            "  [{}] {} - {} / {}",
            location.id, location.name, location.kind, location.dimension
        );
    }

    Ok(())
}
