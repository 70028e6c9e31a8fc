use serde::{Deserialize, Serialize};

use super::{Character, Location};

/// An episode as returned by the upstream catalog.
///
/// `characters` holds relational references and is never serialized to clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
    pub id: i32,
    pub name: String,
    pub air_date: String,
    /// Structured code such as `S01E01`.
    pub episode: String,
    #[serde(skip_serializing)]
    pub characters: Vec<String>,
    /// Season artwork, attached after fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub url: String,
    pub created: String,
}

/// An episode with every character appearing in it and every place those
/// characters come from or currently live in.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeDetail {
    pub episode: Episode,
    pub characters: Vec<Character>,
    pub locations: Vec<Location>,
}
