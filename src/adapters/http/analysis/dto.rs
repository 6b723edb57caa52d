//! HTTP DTOs for analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    AmbiguityDetectionResult, ComplexityLevel, ImplementationPlan, RepositoryAssessment,
    ScopeEstimationResult, StoryPointEstimate,
};
use crate::domain::foundation::Timestamp;

/// Query parameters for story point estimation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryPointsQuery {
    #[serde(default, rename = "repositoryComplexity")]
    pub repository_complexity: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryAnalysisRequest {
    pub repository_content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbiguityResponse {
    pub id: String,
    pub requirement_id: String,
    pub ambiguity_categories: Vec<String>,
    pub analysis: String,
    pub confidence_score: f64,
    pub suggested_improvements: String,
    pub created_at: Timestamp,
}

impl From<AmbiguityDetectionResult> for AmbiguityResponse {
    fn from(result: AmbiguityDetectionResult) -> Self {
        Self {
            id: result.id.to_string(),
            requirement_id: result.requirement_id.to_string(),
            ambiguity_categories: result.ambiguity_categories,
            analysis: result.analysis,
            confidence_score: result.confidence_score,
            suggested_improvements: result.suggested_improvements,
            created_at: result.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeEstimateResponse {
    pub id: String,
    pub requirement_id: String,
    pub estimated_hours: f64,
    pub complexity_level: ComplexityLevel,
    pub confidence_level: f64,
    pub justification: String,
    pub risk_factors: String,
    pub created_at: Timestamp,
}

impl From<ScopeEstimationResult> for ScopeEstimateResponse {
    fn from(result: ScopeEstimationResult) -> Self {
        Self {
            id: result.id.to_string(),
            requirement_id: result.requirement_id.to_string(),
            estimated_hours: result.estimated_hours,
            complexity_level: result.complexity_level,
            confidence_level: result.confidence_level,
            justification: result.justification,
            risk_factors: result.risk_factors,
            created_at: result.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplementationPlanResponse {
    pub id: String,
    pub requirement_id: String,
    pub summary: String,
    pub implementation_steps: Vec<String>,
    pub technical_approach: String,
    pub dependencies: String,
    pub created_at: Timestamp,
}

impl From<ImplementationPlan> for ImplementationPlanResponse {
    fn from(plan: ImplementationPlan) -> Self {
        Self {
            id: plan.id.to_string(),
            requirement_id: plan.requirement_id.to_string(),
            summary: plan.summary,
            implementation_steps: plan.implementation_steps,
            technical_approach: plan.technical_approach,
            dependencies: plan.dependencies,
            created_at: plan.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryPointsResponse {
    pub story_points: u32,
    pub complexity: ComplexityLevel,
    pub confidence_level: f64,
    pub justification: String,
    pub considerations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_factors: Option<String>,
}

impl From<StoryPointEstimate> for StoryPointsResponse {
    fn from(estimate: StoryPointEstimate) -> Self {
        Self {
            story_points: estimate.story_points,
            complexity: estimate.complexity,
            confidence_level: estimate.confidence_level,
            justification: estimate.justification,
            considerations: estimate.considerations,
            developer_factors: estimate.developer_factors,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryAnalysisResponse {
    pub complexity_score: f64,
    pub code_quality_assessment: String,
    pub suggested_improvements: String,
    pub potential_issues: Vec<String>,
}

impl From<RepositoryAssessment> for RepositoryAnalysisResponse {
    fn from(assessment: RepositoryAssessment) -> Self {
        Self {
            complexity_score: assessment.complexity_score,
            code_quality_assessment: assessment.code_quality_assessment,
            suggested_improvements: assessment.suggested_improvements,
            potential_issues: assessment.potential_issues,
        }
    }
}
