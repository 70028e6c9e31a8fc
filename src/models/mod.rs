pub mod character;
pub mod episode;
pub mod location;
pub mod page;

pub use character::{Character, CharacterPlace};
pub use episode::{Episode, EpisodeDetail};
pub use location::Location;
pub use page::{PageInfo, PageMeta, Paginated, UpstreamPage};
