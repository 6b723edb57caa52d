//! AnalysisRepository port for persisted LLM task results.

use async_trait::async_trait;

use crate::domain::{
    analysis::{AmbiguityDetectionResult, ImplementationPlan, ScopeEstimationResult},
    foundation::{DomainError, RequirementId},
};

/// Repository for analysis results attached to requirements.
///
/// Results are append-only; a requirement accumulates one entry per run.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    async fn save_ambiguity(&self, result: &AmbiguityDetectionResult) -> Result<(), DomainError>;

    async fn save_scope(&self, result: &ScopeEstimationResult) -> Result<(), DomainError>;

    async fn save_plan(&self, plan: &ImplementationPlan) -> Result<(), DomainError>;

    async fn ambiguities_for(
        &self,
        requirement_id: &RequirementId,
    ) -> Result<Vec<AmbiguityDetectionResult>, DomainError>;

    async fn scopes_for(
        &self,
        requirement_id: &RequirementId,
    ) -> Result<Vec<ScopeEstimationResult>, DomainError>;

    async fn plans_for(
        &self,
        requirement_id: &RequirementId,
    ) -> Result<Vec<ImplementationPlan>, DomainError>;
}
