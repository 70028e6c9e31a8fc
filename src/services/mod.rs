pub mod image;
pub use image::SeasonImageLocator;

pub mod pagination;
pub use pagination::{PageRequest, WindowPosition};

pub mod integration_service;
pub mod integration_service_impl;
pub use integration_service::{IntegrationError, IntegrationService};
pub use integration_service_impl::CatalogIntegrationService;
