//! In-memory implementation of AnalysisRepository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::analysis::{AmbiguityDetectionResult, ImplementationPlan, ScopeEstimationResult};
use crate::domain::foundation::{DomainError, RequirementId};
use crate::ports::AnalysisRepository;

/// Stores analysis results in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryAnalysisRepository {
    ambiguities: RwLock<Vec<AmbiguityDetectionResult>>,
    scopes: RwLock<Vec<ScopeEstimationResult>>,
    plans: RwLock<Vec<ImplementationPlan>>,
}

impl InMemoryAnalysisRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    async fn save_ambiguity(&self, result: &AmbiguityDetectionResult) -> Result<(), DomainError> {
        self.ambiguities.write().await.push(result.clone());
        Ok(())
    }

    async fn save_scope(&self, result: &ScopeEstimationResult) -> Result<(), DomainError> {
        self.scopes.write().await.push(result.clone());
        Ok(())
    }

    async fn save_plan(&self, plan: &ImplementationPlan) -> Result<(), DomainError> {
        self.plans.write().await.push(plan.clone());
        Ok(())
    }

    async fn ambiguities_for(
        &self,
        requirement_id: &RequirementId,
    ) -> Result<Vec<AmbiguityDetectionResult>, DomainError> {
        Ok(self
            .ambiguities
            .read()
            .await
            .iter()
            .filter(|r| &r.requirement_id == requirement_id)
            .cloned()
            .collect())
    }

    async fn scopes_for(
        &self,
        requirement_id: &RequirementId,
    ) -> Result<Vec<ScopeEstimationResult>, DomainError> {
        Ok(self
            .scopes
            .read()
            .await
            .iter()
            .filter(|r| &r.requirement_id == requirement_id)
            .cloned()
            .collect())
    }

    async fn plans_for(
        &self,
        requirement_id: &RequirementId,
    ) -> Result<Vec<ImplementationPlan>, DomainError> {
        Ok(self
            .plans
            .read()
            .await
            .iter()
            .filter(|p| &p.requirement_id == requirement_id)
            .cloned()
            .collect())
    }
}
