//! HTTP routes for developer endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_developer, delete_developer, get_developer, list_developers, search_by_experience,
    search_by_name, search_by_skill, update_developer, DeveloperHandlers,
};

/// Developer routes, nested under `/api/developers`.
pub fn developer_routes(handlers: DeveloperHandlers) -> Router {
    Router::new()
        .route("/", get(list_developers).post(create_developer))
        .route("/search/name", get(search_by_name))
        .route("/search/experience", get(search_by_experience))
        .route("/search/skill", get(search_by_skill))
        .route(
            "/:id",
            get(get_developer).put(update_developer).delete(delete_developer),
        )
        .with_state(handlers)
}
