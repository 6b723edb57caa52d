//! HTTP routes for analysis endpoints.

use axum::{routing::post, Router};

use super::handlers::{
    analyze_repository, calculate_story_points, calculate_story_points_for_developer,
    detect_ambiguities, estimate_scope, generate_plan, AnalysisHandlers,
};

/// Per-requirement analysis routes, merged into `/api/requirements`.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/:id/analyze", post(detect_ambiguities))
        .route("/:id/estimate", post(estimate_scope))
        .route("/:id/plan", post(generate_plan))
        .route("/:id/story-points", post(calculate_story_points))
        .route(
            "/:id/story-points/developer/:developer_id",
            post(calculate_story_points_for_developer),
        )
        .with_state(handlers)
}

/// Repository analysis, nested under `/api/repositories`.
pub fn repository_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/analyze", post(analyze_repository))
        .with_state(handlers)
}
