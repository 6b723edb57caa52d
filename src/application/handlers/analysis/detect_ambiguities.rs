//! DetectAmbiguitiesHandler - finds vague or missing details in a requirement.

use std::sync::Arc;

use crate::application::handlers::requirement::find_requirement;
use crate::application::RequirementAnalyzer;
use crate::domain::analysis::AmbiguityDetectionResult;
use crate::domain::foundation::{DomainError, RequirementId};
use crate::ports::{AnalysisRepository, RequirementRepository};

#[derive(Debug, Clone)]
pub struct DetectAmbiguitiesCommand {
    pub requirement_id: RequirementId,
}

pub struct DetectAmbiguitiesHandler {
    requirements: Arc<dyn RequirementRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    analyzer: Arc<RequirementAnalyzer>,
}

impl DetectAmbiguitiesHandler {
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

    pub async fn handle(
        &self,
        cmd: DetectAmbiguitiesCommand,
    ) -> Result<AmbiguityDetectionResult, DomainError> {
        let requirement = find_requirement(self.requirements.as_ref(), &cmd.requirement_id).await?;

        let report = self.analyzer.detect_ambiguities(requirement.content()).await?;
        let result = AmbiguityDetectionResult::record(cmd.requirement_id, report);
        self.analyses.save_ambiguity(&result).await?;

        tracing::info!(
            requirement_id = %cmd.requirement_id,
            categories = result.ambiguity_categories.len(),
            "Ambiguity detection completed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{FixedModel, Stores};
    use crate::domain::analysis::AmbiguityReport;
    use crate::domain::foundation::ErrorCode;

    fn handler(stores: &Stores, model: Arc<FixedModel>) -> DetectAmbiguitiesHandler {
        DetectAmbiguitiesHandler::new(
            stores.requirements.clone(),
            stores.analyses.clone(),
            Arc::new(RequirementAnalyzer::new(model)),
        )
    }

    #[tokio::test]
    async fn stores_parsed_result() {
        let stores = Stores::new();
        let requirement = stores.requirement("The page should load fast", None).await;
        let model = FixedModel::replying(
            r#"{"ambiguityCategories": ["Performance"], "analysis": "fast is vague",
                "confidenceScore": 0.9, "suggestedImprovements": "Give a latency budget"}"#,
        );

        let result = handler(&stores, model.clone())
            .handle(DetectAmbiguitiesCommand { requirement_id: *requirement.id() })
            .await
            .unwrap();

        assert_eq!(result.ambiguity_categories, vec!["Performance"]);
        assert_eq!(result.requirement_id, *requirement.id());
        assert!(model.prompts()[0].contains("The page should load fast"));
        assert_eq!(stores.analyses.ambiguities_for(requirement.id()).await.unwrap(), vec![result]);
    }

    #[tokio::test]
    async fn malformed_answer_stores_fallback() {
        let stores = Stores::new();
        let requirement = stores.requirement("Make it nice", None).await;

        let result = handler(&stores, FixedModel::replying("not json"))
            .handle(DetectAmbiguitiesCommand { requirement_id: *requirement.id() })
            .await
            .unwrap();

        let fallback = AmbiguityReport::fallback();
        assert_eq!(result.ambiguity_categories, fallback.ambiguity_categories);
        assert_eq!(result.confidence_score, 0.85);
    }

    #[tokio::test]
    async fn unknown_requirement_is_not_found() {
        let stores = Stores::new();
        let model = FixedModel::replying("{}");

        let err = handler(&stores, model.clone())
            .handle(DetectAmbiguitiesCommand { requirement_id: RequirementId::new() })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RequirementNotFound);
        assert!(model.prompts().is_empty());
    }
}
