pub mod catalog;
pub mod upstream;

pub use catalog::CatalogClient;
pub use upstream::{HttpUpstreamClient, UpstreamClient, UpstreamError};
