//! HTTP adapter for requirement endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateTextRequirementRequest, RequirementResponse, UploadRequirementRequest};
pub use handlers::RequirementHandlers;
pub use routes::requirement_routes;
