//! Requirement queries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, RequirementId};
use crate::domain::requirement::Requirement;
use crate::ports::RequirementRepository;

#[derive(Debug, Clone)]
pub struct GetRequirementQuery {
    pub requirement_id: RequirementId,
}

pub struct GetRequirementHandler {
    repository: Arc<dyn RequirementRepository>,
}

impl GetRequirementHandler {
    pub fn new(repository: Arc<dyn RequirementRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetRequirementQuery) -> Result<Requirement, DomainError> {
        find_requirement(self.repository.as_ref(), &query.requirement_id).await
    }
}

pub struct ListRequirementsHandler {
    repository: Arc<dyn RequirementRepository>,
}

impl ListRequirementsHandler {
    pub fn new(repository: Arc<dyn RequirementRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Requirement>, DomainError> {
        self.repository.find_all().await
    }
}

/// Loads a requirement or fails with `RequirementNotFound`.
pub(crate) async fn find_requirement(
    repository: &dyn RequirementRepository,
    id: &RequirementId,
) -> Result<Requirement, DomainError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(ErrorCode::RequirementNotFound, "Requirement", id))
}
