//! HTTP adapter for developer profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{DeveloperProfileRequest, DeveloperResponse, SearchQuery};
pub use handlers::DeveloperHandlers;
pub use routes::developer_routes;
