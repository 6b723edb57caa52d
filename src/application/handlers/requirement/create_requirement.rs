//! Handlers that create requirements from text or from extracted file text.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::requirement::{Requirement, SourceFile};
use crate::ports::RequirementRepository;

/// Command to create a requirement from submitted text.
#[derive(Debug, Clone)]
pub struct CreateTextRequirementCommand {
    pub title: String,
    pub content: String,
    pub clarity_score: Option<f64>,
}

pub struct CreateTextRequirementHandler {
    repository: Arc<dyn RequirementRepository>,
}

impl CreateTextRequirementHandler {
    pub fn new(repository: Arc<dyn RequirementRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateTextRequirementCommand) -> Result<Requirement, DomainError> {
        let requirement = Requirement::from_text(cmd.title, cmd.content, cmd.clarity_score)?;
        let saved = self.repository.save(requirement).await?;
        tracing::info!(requirement_id = %saved.id(), "Requirement created from text");
        Ok(saved)
    }
}

/// Command to create a requirement from a file whose text was already
/// extracted by the caller.
#[derive(Debug, Clone)]
pub struct UploadRequirementCommand {
    pub title: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub content: String,
}

pub struct UploadRequirementHandler {
    repository: Arc<dyn RequirementRepository>,
}

impl UploadRequirementHandler {
    pub fn new(repository: Arc<dyn RequirementRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UploadRequirementCommand) -> Result<Requirement, DomainError> {
        let source = SourceFile {
            file_name: cmd.file_name,
            content_type: cmd.content_type,
        };
        let requirement = Requirement::from_file(cmd.title, cmd.content, source)?;
        let saved = self.repository.save(requirement).await?;
        tracing::info!(
            requirement_id = %saved.id(),
            source_type = %saved.source_type(),
            "Requirement created from file"
        );
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::Stores;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::requirement::SourceType;

    #[tokio::test]
    async fn creates_text_requirement() {
        let stores = Stores::new();
        let handler = CreateTextRequirementHandler::new(stores.requirements.clone());

        let requirement = handler
            .handle(CreateTextRequirementCommand {
                title: "Login".to_string(),
                content: "Users log in with email".to_string(),
                clarity_score: Some(0.6),
            })
            .await
            .unwrap();

        assert_eq!(requirement.source_type(), SourceType::Text);
        assert!(stores.requirements.find_by_id(requirement.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn rejects_out_of_range_clarity() {
        let stores = Stores::new();
        let handler = CreateTextRequirementHandler::new(stores.requirements.clone());

        let err = handler
            .handle(CreateTextRequirementCommand {
                title: "Login".to_string(),
                content: "Users log in".to_string(),
                clarity_score: Some(1.5),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert!(stores.requirements.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn upload_determines_source_type() {
        let stores = Stores::new();
        let handler = UploadRequirementHandler::new(stores.requirements.clone());

        let requirement = handler
            .handle(UploadRequirementCommand {
                title: "Export".to_string(),
                file_name: Some("export.docx".to_string()),
                content_type: Some("application/octet-stream".to_string()),
                content: "Export reports as CSV".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(requirement.source_type(), SourceType::Word);
        assert_eq!(requirement.file_name(), Some("export.docx"));
    }

    #[tokio::test]
    async fn upload_with_blank_text_fails() {
        let stores = Stores::new();
        let handler = UploadRequirementHandler::new(stores.requirements.clone());

        let err = handler
            .handle(UploadRequirementCommand {
                title: "Export".to_string(),
                file_name: Some("export.pdf".to_string()),
                content_type: Some("application/pdf".to_string()),
                content: "\n".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
    }
}
