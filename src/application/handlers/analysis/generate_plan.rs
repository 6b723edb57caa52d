//! GeneratePlanHandler - drafts an implementation plan for a requirement.

use std::sync::Arc;

use crate::application::handlers::requirement::find_requirement;
use crate::application::RequirementAnalyzer;
use crate::domain::analysis::ImplementationPlan;
use crate::domain::foundation::{DomainError, RequirementId};
use crate::ports::{AnalysisRepository, RequirementRepository};

#[derive(Debug, Clone)]
pub struct GeneratePlanCommand {
    pub requirement_id: RequirementId,
}

pub struct GeneratePlanHandler {
    requirements: Arc<dyn RequirementRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    analyzer: Arc<RequirementAnalyzer>,
}

impl GeneratePlanHandler {
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

    pub async fn handle(&self, cmd: GeneratePlanCommand) -> Result<ImplementationPlan, DomainError> {
        let requirement = find_requirement(self.requirements.as_ref(), &cmd.requirement_id).await?;

        let draft = self.analyzer.generate_plan(requirement.content()).await?;
        let plan = ImplementationPlan::record(cmd.requirement_id, draft);
        self.analyses.save_plan(&plan).await?;

        tracing::info!(
            requirement_id = %cmd.requirement_id,
            steps = plan.implementation_steps.len(),
            "Implementation plan generated"
        );
        Ok(plan)
    }
}
