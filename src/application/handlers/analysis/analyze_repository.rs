//! AnalyzeRepositoryHandler - assesses raw repository text.

use std::sync::Arc;

use crate::application::RequirementAnalyzer;
use crate::domain::analysis::RepositoryAssessment;
use crate::domain::foundation::DomainError;

#[derive(Debug, Clone)]
pub struct AnalyzeRepositoryCommand {
    pub repository_content: String,
}

pub struct AnalyzeRepositoryHandler {
    analyzer: Arc<RequirementAnalyzer>,
}

impl AnalyzeRepositoryHandler {
    pub fn new(analyzer: Arc<RequirementAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub async fn handle(&self, cmd: AnalyzeRepositoryCommand) -> Result<RepositoryAssessment, DomainError> {
        let assessment = self.analyzer.analyze_repository(&cmd.repository_content).await?;
        tracing::info!(score = assessment.complexity_score, "Repository analysis completed");
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::FixedModel;

    #[tokio::test]
    async fn scalar_issue_becomes_list() {
        let model = FixedModel::replying(
            r#"{"complexityScore": 0.4, "codeQualityAssessment": "Tidy",
                "suggestedImprovements": "More tests", "potentialIssues": "Unbounded cache"}"#,
        );
        let handler = AnalyzeRepositoryHandler::new(Arc::new(RequirementAnalyzer::new(model)));

        let assessment = handler
            .handle(AnalyzeRepositoryCommand {
                repository_content: "pub fn main() {}".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(assessment.complexity_score, 0.4);
        assert_eq!(assessment.potential_issues, vec!["Unbounded cache"]);
    }
}
