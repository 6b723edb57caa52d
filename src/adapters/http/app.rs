//! Router assembly: wires ports into handlers and handlers into routes.

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::jira::MockIssueTracker;
use crate::adapters::memory::{
    InMemoryAnalysisRepository, InMemoryDeveloperRepository, InMemoryRequirementRepository,
    InMemoryTicketRepository,
};
use crate::application::handlers::{analysis, developer, requirement, ticket};
use crate::application::RequirementAnalyzer;
use crate::config::ServerConfig;
use crate::ports::{
    AnalysisRepository, DeveloperRepository, IssueTracker, LanguageModel, RequirementRepository,
    TicketRepository,
};

use super::analysis::{analysis_routes, repository_routes, AnalysisHandlers};
use super::developer::{developer_routes, DeveloperHandlers};
use super::requirement::{requirement_routes, RequirementHandlers};
use super::ticket::{ticket_routes, TicketHandlers};

/// Everything the API needs from the outside world.
#[derive(Clone)]
pub struct AppDependencies {
    pub requirements: Arc<dyn RequirementRepository>,
    pub developers: Arc<dyn DeveloperRepository>,
    pub analyses: Arc<dyn AnalysisRepository>,
    pub tickets: Arc<dyn TicketRepository>,
    pub tracker: Arc<dyn IssueTracker>,
    pub model: Arc<dyn LanguageModel>,
}

impl AppDependencies {
    /// In-memory stores around the given model and tracker.
    pub fn in_memory(model: Arc<dyn LanguageModel>, tracker: MockIssueTracker) -> Self {
        Self {
            requirements: Arc::new(InMemoryRequirementRepository::new()),
            developers: Arc::new(InMemoryDeveloperRepository::new()),
            analyses: Arc::new(InMemoryAnalysisRepository::new()),
            tickets: Arc::new(InMemoryTicketRepository::new()),
            tracker: Arc::new(tracker),
            model,
        }
    }
}

/// All API routes plus `/health`, without middleware.
pub fn api_router(deps: &AppDependencies) -> Router {
    let analyzer = Arc::new(RequirementAnalyzer::new(deps.model.clone()));

    let requirement_handlers = RequirementHandlers::new(
        Arc::new(requirement::CreateTextRequirementHandler::new(deps.requirements.clone())),
        Arc::new(requirement::UploadRequirementHandler::new(deps.requirements.clone())),
        Arc::new(requirement::GetRequirementHandler::new(deps.requirements.clone())),
        Arc::new(requirement::ListRequirementsHandler::new(deps.requirements.clone())),
    );

    let analysis_handlers = AnalysisHandlers::new(
        Arc::new(analysis::DetectAmbiguitiesHandler::new(
            deps.requirements.clone(),
            deps.analyses.clone(),
            analyzer.clone(),
        )),
        Arc::new(analysis::EstimateScopeHandler::new(
            deps.requirements.clone(),
            deps.analyses.clone(),
            analyzer.clone(),
        )),
        Arc::new(analysis::GeneratePlanHandler::new(
            deps.requirements.clone(),
            deps.analyses.clone(),
            analyzer.clone(),
        )),
        Arc::new(analysis::CalculateStoryPointsHandler::new(
            deps.requirements.clone(),
            deps.developers.clone(),
            analyzer.clone(),
        )),
        Arc::new(analysis::AnalyzeRepositoryHandler::new(analyzer.clone())),
    );

    let developer_handlers = DeveloperHandlers::new(
        Arc::new(developer::CreateDeveloperHandler::new(deps.developers.clone())),
        Arc::new(developer::UpdateDeveloperHandler::new(deps.developers.clone())),
        Arc::new(developer::DeleteDeveloperHandler::new(deps.developers.clone())),
        Arc::new(developer::GetDeveloperHandler::new(deps.developers.clone())),
        Arc::new(developer::ListDevelopersHandler::new(deps.developers.clone())),
        Arc::new(developer::SearchDevelopersHandler::new(deps.developers.clone())),
    );

    let ticket_handlers = TicketHandlers::new(
        Arc::new(ticket::CreateTicketHandler::new(
            deps.requirements.clone(),
            deps.developers.clone(),
            deps.tickets.clone(),
            deps.tracker.clone(),
            analyzer,
        )),
        Arc::new(ticket::GetTicketHandler::new(deps.tickets.clone())),
        Arc::new(ticket::ListTicketsHandler::new(deps.tickets.clone())),
    );

    Router::new()
        .route("/health", get(health))
        .nest(
            "/api/requirements",
            requirement_routes(requirement_handlers).merge(analysis_routes(analysis_handlers.clone())),
        )
        .nest("/api/repositories", repository_routes(analysis_handlers))
        .nest("/api/developers", developer_routes(developer_handlers))
        .nest("/api/jira/tickets", ticket_routes(ticket_handlers))
}

/// The API with request tracing, CORS and a request timeout applied.
pub fn app(deps: &AppDependencies, server: &ServerConfig) -> Router {
    api_router(deps).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(server))
            .layer(TimeoutLayer::new(server.request_timeout())),
    )
}

/// Any origin unless `cors_origins` lists specific ones.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins()
        .into_iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
