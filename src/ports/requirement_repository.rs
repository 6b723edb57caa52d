//! RequirementRepository port for requirement persistence.

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, RequirementId},
    requirement::Requirement,
};

/// Repository for stored requirements.
#[async_trait]
pub trait RequirementRepository: Send + Sync {
    /// Insert or overwrite a requirement.
    ///
    /// Refreshes `updated_at` and returns the stored state.
    async fn save(&self, requirement: Requirement) -> Result<Requirement, DomainError>;

    async fn find_by_id(&self, id: &RequirementId) -> Result<Option<Requirement>, DomainError>;

    /// All requirements, oldest first.
    async fn find_all(&self) -> Result<Vec<Requirement>, DomainError>;
}
