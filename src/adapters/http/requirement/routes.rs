//! HTTP routes for requirement endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_text_requirement, get_requirement, list_requirements, upload_requirement,
    RequirementHandlers,
};

/// Requirement CRUD routes, nested under `/api/requirements`.
pub fn requirement_routes(handlers: RequirementHandlers) -> Router {
    Router::new()
        .route("/", get(list_requirements))
        .route("/text", post(create_text_requirement))
        .route("/upload", post(upload_requirement))
        .route("/:id", get(get_requirement))
        .with_state(handlers)
}
