//! Error responses shared by every HTTP module.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// Standard error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal() -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "An unexpected error occurred".to_string(),
            details: None,
        }
    }

    fn from_domain(error: &DomainError) -> Self {
        let details = (!error.details.is_empty())
            .then(|| serde_json::to_value(&error.details).ok())
            .flatten();
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}

/// Maps a domain error to a response: validation → 400, not found → 404,
/// anything else → 500 with a generic body. Details of 500s are only logged.
pub fn domain_error_response(error: DomainError) -> Response {
    if error.is_validation() {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::from_domain(&error))).into_response()
    } else if error.is_not_found() {
        (StatusCode::NOT_FOUND, Json(ErrorResponse::from_domain(&error))).into_response()
    } else {
        tracing::error!(code = %error.code, error = %error, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
    }
}

/// 400 for a path id that is not a UUID.
pub fn invalid_id(entity: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!("Invalid {} ID", entity))),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, RequirementId, ValidationError};

    #[test]
    fn validation_maps_to_400() {
        let response = domain_error_response(ValidationError::empty_field("title").into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let error =
            DomainError::not_found(ErrorCode::RequirementNotFound, "Requirement", RequirementId::new());
        assert_eq!(domain_error_response(error).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn everything_else_maps_to_500() {
        let error = DomainError::new(ErrorCode::StorageError, "disk on fire");
        assert_eq!(domain_error_response(error).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_body_is_generic() {
        let body = ErrorResponse::internal();
        assert_eq!(body.code, "INTERNAL_ERROR");
        assert_eq!(body.message, "An unexpected error occurred");
    }
}
