//! RequirementAnalyzer - runs the LLM analysis tasks over requirement text.
//!
//! Every task follows the same path: validate the input, build the task
//! prompt, ask the language model, parse the answer. Model failures never
//! surface as errors; the parser substitutes the task's fallback report.

use std::sync::Arc;

use crate::domain::analysis::{
    parse_as, prompts, AmbiguityReport, PlanDraft, RepositoryAssessment, ScopeEstimate,
    StoryPointEstimate, TaskReport,
};
use crate::domain::developer::DeveloperProfile;
use crate::domain::foundation::DomainError;
use crate::ports::LanguageModel;

pub struct RequirementAnalyzer {
    model: Arc<dyn LanguageModel>,
}

impl RequirementAnalyzer {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn detect_ambiguities(&self, requirement: &str) -> Result<AmbiguityReport, DomainError> {
        ensure_present("requirement", requirement)?;
        Ok(self.run(prompts::ambiguity_detection(requirement)).await)
    }

    pub async fn estimate_scope(&self, requirement: &str) -> Result<ScopeEstimate, DomainError> {
        ensure_present("requirement", requirement)?;
        Ok(self.run(prompts::scope_estimation(requirement)).await)
    }

    pub async fn generate_plan(&self, requirement: &str) -> Result<PlanDraft, DomainError> {
        ensure_present("requirement", requirement)?;
        Ok(self.run(prompts::implementation_plan(requirement)).await)
    }

    /// Story points, optionally adjusted for repository complexity and for
    /// the developer who will do the work.
    pub async fn calculate_story_points(
        &self,
        requirement: &str,
        repository_complexity: Option<f64>,
        developer: Option<&DeveloperProfile>,
    ) -> Result<StoryPointEstimate, DomainError> {
        ensure_present("requirement", requirement)?;
        let prompt = prompts::story_points(requirement, repository_complexity, developer);
        Ok(self.run(prompt).await)
    }

    pub async fn analyze_repository(
        &self,
        repository_content: &str,
    ) -> Result<RepositoryAssessment, DomainError> {
        ensure_present("repository_content", repository_content)?;
        Ok(self.run(prompts::repository_analysis(repository_content)).await)
    }

    async fn run<R: TaskReport>(&self, prompt: String) -> R {
        let kind = R::KIND;
        tracing::debug!(task = %kind, "Sending analysis prompt");
        let raw = self.model.ask(&prompt).await;
        parse_as(&raw)
    }
}

fn ensure_present(field: &str, text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::validation(field, format!("{} cannot be empty", field)));
    }
    Ok(())
}
