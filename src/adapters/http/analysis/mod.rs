//! HTTP adapter for the LLM analysis endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AmbiguityResponse, ImplementationPlanResponse, RepositoryAnalysisRequest,
    RepositoryAnalysisResponse, ScopeEstimateResponse, StoryPointsQuery, StoryPointsResponse,
};
pub use handlers::AnalysisHandlers;
pub use routes::{analysis_routes, repository_routes};
