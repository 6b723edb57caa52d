//! HTTP handlers for developer endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, invalid_id};
use crate::application::handlers::developer::{
    CreateDeveloperCommand, CreateDeveloperHandler, DeleteDeveloperCommand,
    DeleteDeveloperHandler, GetDeveloperHandler, GetDeveloperQuery, ListDevelopersHandler,
    SearchDevelopersHandler, SearchDevelopersQuery, UpdateDeveloperCommand,
    UpdateDeveloperHandler,
};
use crate::domain::developer::DeveloperProfile;
use crate::domain::foundation::{DeveloperId, DomainError};

use super::dto::{DeveloperProfileRequest, DeveloperResponse, SearchQuery};

#[derive(Clone)]
pub struct DeveloperHandlers {
    create_handler: Arc<CreateDeveloperHandler>,
    update_handler: Arc<UpdateDeveloperHandler>,
    delete_handler: Arc<DeleteDeveloperHandler>,
    get_handler: Arc<GetDeveloperHandler>,
    list_handler: Arc<ListDevelopersHandler>,
    search_handler: Arc<SearchDevelopersHandler>,
}

impl DeveloperHandlers {
    pub fn new(
        create_handler: Arc<CreateDeveloperHandler>,
        update_handler: Arc<UpdateDeveloperHandler>,
        delete_handler: Arc<DeleteDeveloperHandler>,
        get_handler: Arc<GetDeveloperHandler>,
        list_handler: Arc<ListDevelopersHandler>,
        search_handler: Arc<SearchDevelopersHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
            get_handler,
            list_handler,
            search_handler,
        }
    }
}

fn list_response(result: Result<Vec<DeveloperProfile>, DomainError>) -> Response {
    match result {
        Ok(profiles) => {
            let body: Vec<DeveloperResponse> =
                profiles.into_iter().map(DeveloperResponse::from).collect();
            Json(body).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/developers
pub async fn create_developer(
    State(handlers): State<DeveloperHandlers>,
    Json(req): Json<DeveloperProfileRequest>,
) -> Response {
    let cmd = CreateDeveloperCommand { profile: req.into() };

    match handlers.create_handler.handle(cmd).await {
        Ok(profile) => (StatusCode::CREATED, Json(DeveloperResponse::from(profile))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/developers/:id
pub async fn update_developer(
    State(handlers): State<DeveloperHandlers>,
    Path(developer_id): Path<String>,
    Json(req): Json<DeveloperProfileRequest>,
) -> Response {
    let Ok(developer_id) = developer_id.parse::<DeveloperId>() else {
        return invalid_id("developer");
    };
    let cmd = UpdateDeveloperCommand {
        developer_id,
        profile: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(profile) => Json(DeveloperResponse::from(profile)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/developers/:id
pub async fn delete_developer(
    State(handlers): State<DeveloperHandlers>,
    Path(developer_id): Path<String>,
) -> Response {
    let Ok(developer_id) = developer_id.parse::<DeveloperId>() else {
        return invalid_id("developer");
    };

    match handlers.delete_handler.handle(DeleteDeveloperCommand { developer_id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/developers/:id
pub async fn get_developer(
    State(handlers): State<DeveloperHandlers>,
    Path(developer_id): Path<String>,
) -> Response {
    let Ok(developer_id) = developer_id.parse::<DeveloperId>() else {
        return invalid_id("developer");
    };

    match handlers.get_handler.handle(GetDeveloperQuery { developer_id }).await {
        Ok(profile) => Json(DeveloperResponse::from(profile)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/developers
pub async fn list_developers(State(handlers): State<DeveloperHandlers>) -> Response {
    list_response(handlers.list_handler.handle().await)
}

/// GET /api/developers/search/name?name=
pub async fn search_by_name(
    State(handlers): State<DeveloperHandlers>,
    Query(query): Query<SearchQuery>,
) -> Response {
    list_response(handlers.search_handler.handle(SearchDevelopersQuery::Name(query.name)).await)
}

/// GET /api/developers/search/experience?experienceLevel=
pub async fn search_by_experience(
    State(handlers): State<DeveloperHandlers>,
    Query(query): Query<SearchQuery>,
) -> Response {
    list_response(
        handlers
            .search_handler
            .handle(SearchDevelopersQuery::ExperienceLevel(query.experience_level))
            .await,
    )
}

/// GET /api/developers/search/skill?skill=
pub async fn search_by_skill(
    State(handlers): State<DeveloperHandlers>,
    Query(query): Query<SearchQuery>,
) -> Response {
    list_response(handlers.search_handler.handle(SearchDevelopersQuery::Skill(query.skill)).await)
}
