//! Persisted analysis results attached to a requirement.
//!
//! Each record wraps a parsed report with its own identity, the requirement
//! it belongs to and a creation time. Records are never modified after
//! creation.

use crate::domain::foundation::{
    AmbiguityResultId, ImplementationPlanId, RequirementId, ScopeEstimateId, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::{AmbiguityReport, ComplexityLevel, PlanDraft, ScopeEstimate};

/// Stored outcome of an ambiguity detection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbiguityDetectionResult {
    pub id: AmbiguityResultId,
    pub requirement_id: RequirementId,
    pub ambiguity_categories: Vec<String>,
    pub analysis: String,
    pub confidence_score: f64,
    pub suggested_improvements: String,
    pub created_at: Timestamp,
}

impl AmbiguityDetectionResult {
    pub fn record(requirement_id: RequirementId, report: AmbiguityReport) -> Self {
        Self {
            id: AmbiguityResultId::new(),
            requirement_id,
            ambiguity_categories: report.ambiguity_categories,
            analysis: report.analysis,
            confidence_score: report.confidence_score,
            suggested_improvements: report.suggested_improvements,
            created_at: Timestamp::now(),
        }
    }
}

/// Stored outcome of a scope estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeEstimationResult {
    pub id: ScopeEstimateId,
    pub requirement_id: RequirementId,
    pub estimated_hours: f64,
    pub complexity_level: ComplexityLevel,
    pub confidence_level: f64,
    pub justification: String,
    pub risk_factors: String,
    pub created_at: Timestamp,
}

impl ScopeEstimationResult {
    pub fn record(requirement_id: RequirementId, estimate: ScopeEstimate) -> Self {
        Self {
            id: ScopeEstimateId::new(),
            requirement_id,
            estimated_hours: estimate.estimated_hours,
            complexity_level: estimate.complexity_level,
            confidence_level: estimate.confidence_level,
            justification: estimate.justification,
            risk_factors: estimate.risk_factors,
            created_at: Timestamp::now(),
        }
    }
}

/// Stored implementation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationPlan {
    pub id: ImplementationPlanId,
    pub requirement_id: RequirementId,
    pub summary: String,
    pub implementation_steps: Vec<String>,
    pub technical_approach: String,
    pub dependencies: String,
    pub created_at: Timestamp,
}

impl ImplementationPlan {
    pub fn record(requirement_id: RequirementId, draft: PlanDraft) -> Self {
        Self {
            id: ImplementationPlanId::new(),
            requirement_id,
            summary: draft.summary,
            implementation_steps: draft.implementation_steps,
            technical_approach: draft.technical_approach,
            dependencies: draft.dependencies,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_record_keeps_step_order() {
        let requirement_id = RequirementId::new();
        let plan = ImplementationPlan::record(requirement_id, PlanDraft::fallback());
        assert_eq!(plan.requirement_id, requirement_id);
        assert_eq!(plan.implementation_steps.first().map(String::as_str), Some("Design database schema"));
        assert_eq!(plan.implementation_steps.len(), 5);
    }

    #[test]
    fn records_get_fresh_ids() {
        let requirement_id = RequirementId::new();
        let a = ScopeEstimationResult::record(requirement_id, ScopeEstimate::fallback());
        let b = ScopeEstimationResult::record(requirement_id, ScopeEstimate::fallback());
        assert_ne!(a.id, b.id);
        assert_eq!(a.complexity_level, ComplexityLevel::Medium);
    }
}
