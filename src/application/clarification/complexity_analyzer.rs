//! ComplexityAnalyzer - second phase of the feature workflow.

use std::sync::Arc;

use crate::domain::analysis::{parse_as, prompts, FeatureComplexityReport};
use crate::ports::{ContextSearch, LanguageModel};

const CONTEXT_SNIPPETS: usize = 5;

/// Assesses a clarified feature request against retrieved code context.
pub struct ComplexityAnalyzer {
    search: Arc<dyn ContextSearch>,
    model: Arc<dyn LanguageModel>,
}

impl ComplexityAnalyzer {
    pub fn new(search: Arc<dyn ContextSearch>, model: Arc<dyn LanguageModel>) -> Self {
        Self { search, model }
    }

    pub async fn analyze(&self, description: &str) -> FeatureComplexityReport {
        tracing::info!("Starting feature complexity analysis");
        let context = self.search.search(description, CONTEXT_SNIPPETS).await;
        tracing::debug!(snippets = context.len(), "Retrieved code context");

        let raw = self
            .model
            .ask(&prompts::feature_complexity(description, &context))
            .await;
        let report = parse_as(&raw);

        tracing::info!("Complexity analysis completed");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::CannedLanguageModel;
    use crate::adapters::search::InMemoryContextSearch;
    use async_trait::async_trait;

    struct Garbled;

    #[async_trait]
    impl LanguageModel for Garbled {
        async fn ask(&self, _prompt: &str) -> String {
            "Error: service unavailable".to_string()
        }
    }

    #[tokio::test]
    async fn canned_model_report_is_parsed() {
        let search = Arc::new(InMemoryContextSearch::new());
        let analyzer = ComplexityAnalyzer::new(search.clone(), Arc::new(CannedLanguageModel::new()));

        let report = analyzer.analyze("Add login\nClarification: Admin").await;

        assert_eq!(report.complexity, "Medium");
        assert_eq!(report.story_points, 5);
        assert_eq!(report.subtasks, vec!["Update user schema", "Modify login flow"]);
        assert_eq!(search.call_count(), 1);
    }

    #[tokio::test]
    async fn unparseable_answer_yields_fallback() {
        let analyzer = ComplexityAnalyzer::new(Arc::new(InMemoryContextSearch::new()), Arc::new(Garbled));

        let report = analyzer.analyze("Add login").await;

        assert_eq!(report, FeatureComplexityReport::fallback());
        assert_eq!(report.risks, vec!["Complexity analysis response could not be parsed"]);
    }
}
