//! EstimateScopeHandler - estimates effort for a stored requirement.

use std::sync::Arc;

use crate::application::handlers::requirement::find_requirement;
use crate::application::RequirementAnalyzer;
use crate::domain::analysis::ScopeEstimationResult;
use crate::domain::foundation::{DomainError, RequirementId};
use crate::ports::{AnalysisRepository, RequirementRepository};

#[derive(Debug, Clone)]
pub struct EstimateScopeCommand {
    pub requirement_id: RequirementId,
}

pub struct EstimateScopeHandler {
    requirements: Arc<dyn RequirementRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    analyzer: Arc<RequirementAnalyzer>,
}

impl EstimateScopeHandler {
    pub fn new(
        requirements: Arc<dyn RequirementRepository>,
        analyses: Arc<dyn AnalysisRepository>,
        analyzer: Arc<RequirementAnalyzer>,
    ) -> Self {
        Self {
            requirements,
            analyses,
            analyzer,
        }
    }

    pub async fn handle(&self, cmd: EstimateScopeCommand) -> Result<ScopeEstimationResult, DomainError> {
        let requirement = find_requirement(self.requirements.as_ref(), &cmd.requirement_id).await?;

        let estimate = self.analyzer.estimate_scope(requirement.content()).await?;
        let result = ScopeEstimationResult::record(cmd.requirement_id, estimate);
        self.analyses.save_scope(&result).await?;

        tracing::info!(
            requirement_id = %cmd.requirement_id,
            hours = result.estimated_hours,
            "Scope estimation completed"
        );
        Ok(result)
    }
}
