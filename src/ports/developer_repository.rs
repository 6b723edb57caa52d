//! DeveloperRepository port for developer profile persistence.

use async_trait::async_trait;

use crate::domain::{
    developer::DeveloperProfile,
    foundation::{DeveloperId, DomainError},
};

/// Repository for developer profiles.
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Insert or overwrite a profile.
    async fn save(&self, profile: &DeveloperProfile) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &DeveloperId) -> Result<Option<DeveloperProfile>, DomainError>;

    async fn find_all(&self) -> Result<Vec<DeveloperProfile>, DomainError>;

    /// Profiles whose name contains `fragment`, ignoring case.
    async fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<DeveloperProfile>, DomainError>;

    /// Profiles with exactly this experience level.
    async fn find_by_experience_level(
        &self,
        level: &str,
    ) -> Result<Vec<DeveloperProfile>, DomainError>;

    /// Profiles listing this skill.
    async fn find_by_skill(&self, skill: &str) -> Result<Vec<DeveloperProfile>, DomainError>;

    /// Remove a profile. Returns false if it did not exist.
    async fn delete(&self, id: &DeveloperId) -> Result<bool, DomainError>;
}
