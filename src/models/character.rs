use serde::{Deserialize, Serialize};

/// A named link from a character to a location. The upstream leaves `url`
/// empty when the place is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterPlace {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: CharacterPlace,
    pub location: CharacterPlace,
    pub image: String,
    #[serde(skip_serializing)]
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

impl Character {
    /// Origin and current location references, in that order.
    pub fn place_references(&self) -> impl Iterator<Item = &str> {
        [self.origin.url.as_str(), self.location.url.as_str()].into_iter()
    }
}
