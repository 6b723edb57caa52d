//! HTTP DTOs for requirement endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::requirement::{Requirement, SourceType};

/// Request to create a requirement from text.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTextRequirementRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub clarity_score: Option<f64>,
}

/// Request to create a requirement from a file's extracted text.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequirementRequest {
    pub title: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub clarity_score: Option<f64>,
    pub source_type: SourceType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Requirement> for RequirementResponse {
    fn from(requirement: Requirement) -> Self {
        Self {
            id: requirement.id().to_string(),
            title: requirement.title().to_string(),
            content: requirement.content().to_string(),
            file_name: requirement.file_name().map(str::to_string),
            file_type: requirement.file_type().map(str::to_string),
            clarity_score: requirement.clarity_score(),
            source_type: requirement.source_type(),
            created_at: *requirement.created_at(),
            updated_at: *requirement.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clarity_score_is_optional() {
        let req: CreateTextRequirementRequest =
            serde_json::from_str(r#"{"title": "Login", "content": "Users log in"}"#).unwrap();
        assert!(req.clarity_score.is_none());
    }

    #[test]
    fn response_uses_screaming_source_type() {
        let requirement = Requirement::from_text("Login".into(), "Users log in".into(), None).unwrap();
        let json = serde_json::to_value(RequirementResponse::from(requirement)).unwrap();
        assert_eq!(json["source_type"], "TEXT");
        assert!(json["file_name"].is_null());
    }
}
