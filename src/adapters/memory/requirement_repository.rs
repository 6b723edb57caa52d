//! In-memory implementation of RequirementRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, RequirementId};
use crate::domain::requirement::Requirement;
use crate::ports::RequirementRepository;

#[derive(Debug, Default)]
pub struct InMemoryRequirementRepository {
    requirements: RwLock<HashMap<RequirementId, Requirement>>,
}

impl InMemoryRequirementRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RequirementRepository for InMemoryRequirementRepository {
    async fn save(&self, mut requirement: Requirement) -> Result<Requirement, DomainError> {
        requirement.touch();
        self.requirements
            .write()
            .await
            .insert(*requirement.id(), requirement.clone());
        Ok(requirement)
    }

    async fn find_by_id(&self, id: &RequirementId) -> Result<Option<Requirement>, DomainError> {
        Ok(self.requirements.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Requirement>, DomainError> {
        let mut all: Vec<Requirement> = self.requirements.read().await.values().cloned().collect();
        all.sort_by_key(|r| *r.created_at());
        Ok(all)
    }
}
