//! HTTP handlers for requirement endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, invalid_id};
use crate::application::handlers::requirement::{
    CreateTextRequirementCommand, CreateTextRequirementHandler, GetRequirementHandler,
    GetRequirementQuery, ListRequirementsHandler, UploadRequirementCommand,
    UploadRequirementHandler,
};
use crate::domain::foundation::RequirementId;

use super::dto::{CreateTextRequirementRequest, RequirementResponse, UploadRequirementRequest};

#[derive(Clone)]
pub struct RequirementHandlers {
    create_text_handler: Arc<CreateTextRequirementHandler>,
    upload_handler: Arc<UploadRequirementHandler>,
    get_handler: Arc<GetRequirementHandler>,
    list_handler: Arc<ListRequirementsHandler>,
}

impl RequirementHandlers {
    pub fn new(
        create_text_handler: Arc<CreateTextRequirementHandler>,
        upload_handler: Arc<UploadRequirementHandler>,
        get_handler: Arc<GetRequirementHandler>,
        list_handler: Arc<ListRequirementsHandler>,
    ) -> Self {
        Self {
            create_text_handler,
            upload_handler,
            get_handler,
            list_handler,
        }
    }
}

/// POST /api/requirements/text
pub async fn create_text_requirement(
    State(handlers): State<RequirementHandlers>,
    Json(req): Json<CreateTextRequirementRequest>,
) -> Response {
    let cmd = CreateTextRequirementCommand {
        title: req.title,
        content: req.content,
        clarity_score: req.clarity_score,
    };

    match handlers.create_text_handler.handle(cmd).await {
        Ok(requirement) => {
            (StatusCode::CREATED, Json(RequirementResponse::from(requirement))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/requirements/upload
pub async fn upload_requirement(
    State(handlers): State<RequirementHandlers>,
    Json(req): Json<UploadRequirementRequest>,
) -> Response {
    let cmd = UploadRequirementCommand {
        title: req.title,
        file_name: req.file_name,
        content_type: req.content_type,
        content: req.content,
    };

    match handlers.upload_handler.handle(cmd).await {
        Ok(requirement) => {
            (StatusCode::CREATED, Json(RequirementResponse::from(requirement))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/requirements/:id
pub async fn get_requirement(
    State(handlers): State<RequirementHandlers>,
    Path(requirement_id): Path<String>,
) -> Response {
    let Ok(requirement_id) = requirement_id.parse::<RequirementId>() else {
        return invalid_id("requirement");
    };

    match handlers.get_handler.handle(GetRequirementQuery { requirement_id }).await {
        Ok(requirement) => Json(RequirementResponse::from(requirement)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/requirements
pub async fn list_requirements(State(handlers): State<RequirementHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(requirements) => {
            let body: Vec<RequirementResponse> =
                requirements.into_iter().map(RequirementResponse::from).collect();
            Json(body).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
