//! CalculateStoryPointsHandler - story point estimate for a requirement,
//! optionally tailored to a developer.
//!
//! Estimates are returned to the caller and not stored.

use std::sync::Arc;

use crate::application::handlers::developer::find_developer;
use crate::application::handlers::requirement::find_requirement;
use crate::application::RequirementAnalyzer;
use crate::domain::analysis::StoryPointEstimate;
use crate::domain::foundation::{DeveloperId, DomainError, RequirementId, ValidationError};
use crate::ports::{DeveloperRepository, RequirementRepository};

#[derive(Debug, Clone)]
pub struct CalculateStoryPointsCommand {
    pub requirement_id: RequirementId,
    /// Repository complexity score in `0.0..=1.0`.
    pub repository_complexity: Option<f64>,
    pub developer_id: Option<DeveloperId>,
}

pub struct CalculateStoryPointsHandler {
    requirements: Arc<dyn RequirementRepository>,
    developers: Arc<dyn DeveloperRepository>,
    analyzer: Arc<RequirementAnalyzer>,
}

impl CalculateStoryPointsHandler {
    pub fn new(
        requirements: Arc<dyn RequirementRepository>,
        developers: Arc<dyn DeveloperRepository>,
        analyzer: Arc<RequirementAnalyzer>,
    ) -> Self {
        Self {
            requirements,
            developers,
            analyzer,
        }
    }

    pub async fn handle(
        &self,
        cmd: CalculateStoryPointsCommand,
    ) -> Result<StoryPointEstimate, DomainError> {
        if let Some(score) = cmd.repository_complexity {
            if !(0.0..=1.0).contains(&score) {
                return Err(
                    ValidationError::out_of_range("repository_complexity", 0.0, 1.0, score).into(),
                );
            }
        }

        let requirement = find_requirement(self.requirements.as_ref(), &cmd.requirement_id).await?;
        let developer = match &cmd.developer_id {
            Some(id) => Some(find_developer(self.developers.as_ref(), id).await?),
            None => None,
        };

        let estimate = self
            .analyzer
            .calculate_story_points(
                requirement.content(),
                cmd.repository_complexity,
                developer.as_ref(),
            )
            .await?;

        tracing::info!(
            requirement_id = %cmd.requirement_id,
            developer_id = ?cmd.developer_id,
            story_points = estimate.story_points,
            "Story points calculated"
        );
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{FixedModel, Stores};
    use crate::domain::foundation::ErrorCode;

    fn handler(stores: &Stores, model: Arc<FixedModel>) -> CalculateStoryPointsHandler {
        CalculateStoryPointsHandler::new(
            stores.requirements.clone(),
            stores.developers.clone(),
            Arc::new(RequirementAnalyzer::new(model)),
        )
    }

    #[tokio::test]
    async fn developer_profile_is_part_of_prompt() {
        let stores = Stores::new();
        let requirement = stores.requirement("Add SSO", None).await;
        let developer = stores.developer("Alice").await;
        let model = FixedModel::replying(
            r#"{"storyPoints": 3, "complexity": "Low", "considerations": "Known stack",
                "developerFactors": "Senior Rust developer"}"#,
        );

        let estimate = handler(&stores, model.clone())
            .handle(CalculateStoryPointsCommand {
                requirement_id: *requirement.id(),
                repository_complexity: None,
                developer_id: Some(*developer.id()),
            })
            .await
            .unwrap();

        assert_eq!(estimate.story_points, 3);
        assert_eq!(estimate.considerations, vec!["Known stack"]);
        assert_eq!(estimate.developer_factors.as_deref(), Some("Senior Rust developer"));
        assert!(model.prompts()[0].contains("Senior"));
    }

    #[tokio::test]
    async fn unknown_developer_is_not_found() {
        let stores = Stores::new();
        let requirement = stores.requirement("Add SSO", None).await;

        let err = handler(&stores, FixedModel::replying("{}"))
            .handle(CalculateStoryPointsCommand {
                requirement_id: *requirement.id(),
                repository_complexity: None,
                developer_id: Some(DeveloperId::new()),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DeveloperNotFound);
    }

    #[tokio::test]
    async fn repository_complexity_must_be_a_fraction() {
        let stores = Stores::new();
        let requirement = stores.requirement("Add SSO", None).await;

        let err = handler(&stores, FixedModel::replying("{}"))
            .handle(CalculateStoryPointsCommand {
                requirement_id: *requirement.id(),
                repository_complexity: Some(3.0),
                developer_id: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfRange);
    }
}
