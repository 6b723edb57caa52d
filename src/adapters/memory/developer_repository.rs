//! In-memory implementation of DeveloperRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::developer::DeveloperProfile;
use crate::domain::foundation::{DeveloperId, DomainError};
use crate::ports::DeveloperRepository;

#[derive(Debug, Default)]
pub struct InMemoryDeveloperRepository {
    profiles: RwLock<HashMap<DeveloperId, DeveloperProfile>>,
}

impl InMemoryDeveloperRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered<F>(&self, keep: F) -> Vec<DeveloperProfile>
    where
        F: Fn(&DeveloperProfile) -> bool,
    {
        let mut matches: Vec<DeveloperProfile> = self
            .profiles
            .read()
            .await
            .values()
            .filter(|p| keep(p))
            .cloned()
            .collect();
        matches.sort_by_key(|p| *p.created_at());
        matches
    }
}

#[async_trait]
impl DeveloperRepository for InMemoryDeveloperRepository {
    async fn save(&self, profile: &DeveloperProfile) -> Result<(), DomainError> {
        self.profiles.write().await.insert(*profile.id(), profile.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DeveloperId) -> Result<Option<DeveloperProfile>, DomainError> {
        Ok(self.profiles.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<DeveloperProfile>, DomainError> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<DeveloperProfile>, DomainError> {
        Ok(self.filtered(|p| p.name_contains(fragment)).await)
    }

    async fn find_by_experience_level(
        &self,
        level: &str,
    ) -> Result<Vec<DeveloperProfile>, DomainError> {
        Ok(self.filtered(|p| p.experience_level() == level).await)
    }

    async fn find_by_skill(&self, skill: &str) -> Result<Vec<DeveloperProfile>, DomainError> {
        Ok(self.filtered(|p| p.has_skill(skill)).await)
    }

    async fn delete(&self, id: &DeveloperId) -> Result<bool, DomainError> {
        Ok(self.profiles.write().await.remove(id).is_some())
    }
}
