//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, invalid_id};
use crate::application::handlers::analysis::{
    AnalyzeRepositoryCommand, AnalyzeRepositoryHandler, CalculateStoryPointsCommand,
    CalculateStoryPointsHandler, DetectAmbiguitiesCommand, DetectAmbiguitiesHandler,
    EstimateScopeCommand, EstimateScopeHandler, GeneratePlanCommand, GeneratePlanHandler,
};
use crate::domain::foundation::{DeveloperId, RequirementId};

use super::dto::{
    AmbiguityResponse, ImplementationPlanResponse, RepositoryAnalysisRequest,
    RepositoryAnalysisResponse, ScopeEstimateResponse, StoryPointsQuery, StoryPointsResponse,
};

#[derive(Clone)]
pub struct AnalysisHandlers {
    ambiguity_handler: Arc<DetectAmbiguitiesHandler>,
    scope_handler: Arc<EstimateScopeHandler>,
    plan_handler: Arc<GeneratePlanHandler>,
    story_points_handler: Arc<CalculateStoryPointsHandler>,
    repository_handler: Arc<AnalyzeRepositoryHandler>,
}

impl AnalysisHandlers {
    pub fn new(
        ambiguity_handler: Arc<DetectAmbiguitiesHandler>,
        scope_handler: Arc<EstimateScopeHandler>,
        plan_handler: Arc<GeneratePlanHandler>,
        story_points_handler: Arc<CalculateStoryPointsHandler>,
        repository_handler: Arc<AnalyzeRepositoryHandler>,
    ) -> Self {
        Self {
            ambiguity_handler,
            scope_handler,
            plan_handler,
            story_points_handler,
            repository_handler,
        }
    }
}

/// POST /api/requirements/:id/analyze
pub async fn detect_ambiguities(
    State(handlers): State<AnalysisHandlers>,
    Path(requirement_id): Path<String>,
) -> Response {
    let Ok(requirement_id) = requirement_id.parse::<RequirementId>() else {
        return invalid_id("requirement");
    };

    match handlers
        .ambiguity_handler
        .handle(DetectAmbiguitiesCommand { requirement_id })
        .await
    {
        Ok(result) => Json(AmbiguityResponse::from(result)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/requirements/:id/estimate
pub async fn estimate_scope(
    State(handlers): State<AnalysisHandlers>,
    Path(requirement_id): Path<String>,
) -> Response {
    let Ok(requirement_id) = requirement_id.parse::<RequirementId>() else {
        return invalid_id("requirement");
    };

    match handlers.scope_handler.handle(EstimateScopeCommand { requirement_id }).await {
        Ok(result) => Json(ScopeEstimateResponse::from(result)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/requirements/:id/plan
pub async fn generate_plan(
    State(handlers): State<AnalysisHandlers>,
    Path(requirement_id): Path<String>,
) -> Response {
    let Ok(requirement_id) = requirement_id.parse::<RequirementId>() else {
        return invalid_id("requirement");
    };

    match handlers.plan_handler.handle(GeneratePlanCommand { requirement_id }).await {
        Ok(plan) => Json(ImplementationPlanResponse::from(plan)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/requirements/:id/story-points
pub async fn calculate_story_points(
    State(handlers): State<AnalysisHandlers>,
    Path(requirement_id): Path<String>,
    Query(query): Query<StoryPointsQuery>,
) -> Response {
    let Ok(requirement_id) = requirement_id.parse::<RequirementId>() else {
        return invalid_id("requirement");
    };

    let cmd = CalculateStoryPointsCommand {
        requirement_id,
        repository_complexity: query.repository_complexity,
        developer_id: None,
    };
    story_points_response(&handlers, cmd).await
}

/// POST /api/requirements/:id/story-points/developer/:developer_id
pub async fn calculate_story_points_for_developer(
    State(handlers): State<AnalysisHandlers>,
    Path((requirement_id, developer_id)): Path<(String, String)>,
) -> Response {
    let Ok(requirement_id) = requirement_id.parse::<RequirementId>() else {
        return invalid_id("requirement");
    };
    let Ok(developer_id) = developer_id.parse::<DeveloperId>() else {
        return invalid_id("developer");
    };

    let cmd = CalculateStoryPointsCommand {
        requirement_id,
        repository_complexity: None,
        developer_id: Some(developer_id),
    };
    story_points_response(&handlers, cmd).await
}

async fn story_points_response(
    handlers: &AnalysisHandlers,
    cmd: CalculateStoryPointsCommand,
) -> Response {
    match handlers.story_points_handler.handle(cmd).await {
        Ok(estimate) => Json(StoryPointsResponse::from(estimate)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/repositories/analyze
pub async fn analyze_repository(
    State(handlers): State<AnalysisHandlers>,
    Json(req): Json<RepositoryAnalysisRequest>,
) -> Response {
    let cmd = AnalyzeRepositoryCommand {
        repository_content: req.repository_content,
    };

    match handlers.repository_handler.handle(cmd).await {
        Ok(assessment) => Json(RepositoryAnalysisResponse::from(assessment)).into_response(),
        Err(e) => domain_error_response(e),
    }
}
