//! Typed results of the LLM analysis tasks.
//!
//! Every report decodes from the camelCase JSON object the matching prompt
//! asks for. Missing keys take the field's default value. Each report also
//! has a fixed `fallback()` used when the model's answer cannot be decoded.

use serde::{Deserialize, Deserializer, Serialize};

use super::ComplexityLevel;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Accepts any JSON number, truncating fractions. Models often write `8.0`.
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.trunc() as u32)
}

/// Ambiguities found in a requirement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AmbiguityReport {
    pub ambiguity_categories: Vec<String>,
    pub analysis: String,
    pub confidence_score: f64,
    pub suggested_improvements: String,
}

impl AmbiguityReport {
    pub fn fallback() -> Self {
        Self {
            ambiguity_categories: strings(&["Vague terms", "Missing constraints"]),
            analysis: "The requirement contains vague terms and lacks specific constraints."
                .to_string(),
            confidence_score: 0.85,
            suggested_improvements:
                "Add specific metrics and constraints to clarify the requirement.".to_string(),
        }
    }
}

/// Effort estimate in hours.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopeEstimate {
    pub estimated_hours: f64,
    pub complexity_level: ComplexityLevel,
    pub confidence_level: f64,
    pub justification: String,
    pub risk_factors: String,
}

impl ScopeEstimate {
    pub fn fallback() -> Self {
        Self {
            estimated_hours: 24.0,
            complexity_level: ComplexityLevel::Medium,
            confidence_level: 0.75,
            justification: "The requirement involves moderate complexity and requires \
                            integration with existing systems."
                .to_string(),
            risk_factors: "Potential integration issues, unclear performance requirements."
                .to_string(),
        }
    }
}

/// Ordered implementation plan proposed by the model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanDraft {
    pub summary: String,
    pub implementation_steps: Vec<String>,
    pub technical_approach: String,
    pub dependencies: String,
}

impl PlanDraft {
    pub fn fallback() -> Self {
        Self {
            summary: "Implement a RESTful API with database integration".to_string(),
            implementation_steps: strings(&[
                "Design database schema",
                "Create API endpoints",
                "Implement business logic",
                "Write unit tests",
                "Perform integration testing",
            ]),
            technical_approach: "Use Spring Boot for the backend, with JPA for database access"
                .to_string(),
            dependencies: "Spring Boot, Spring Data JPA, H2 Database".to_string(),
        }
    }
}

/// Story point estimate, optionally tailored to a developer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryPointEstimate {
    #[serde(deserialize_with = "whole_number")]
    pub story_points: u32,
    pub complexity: ComplexityLevel,
    pub confidence_level: f64,
    pub justification: String,
    pub considerations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_factors: Option<String>,
}

impl StoryPointEstimate {
    pub fn fallback() -> Self {
        Self {
            story_points: 5,
            complexity: ComplexityLevel::Medium,
            confidence_level: 0.8,
            justification: "The requirement has moderate complexity and requires integration \
                            with existing systems."
                .to_string(),
            considerations: strings(&[
                "Technical complexity",
                "Integration requirements",
                "Testing effort",
                "UI/UX components",
            ]),
            developer_factors: None,
        }
    }
}

/// Complexity and quality assessment of repository content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositoryAssessment {
    pub complexity_score: f64,
    pub code_quality_assessment: String,
    pub suggested_improvements: String,
    pub potential_issues: Vec<String>,
}

impl RepositoryAssessment {
    pub fn fallback() -> Self {
        Self {
            complexity_score: 0.65,
            code_quality_assessment: "The code is moderately complex with some technical debt."
                .to_string(),
            suggested_improvements:
                "Increase test coverage, refactor complex methods, improve documentation."
                    .to_string(),
            potential_issues: strings(&[
                "Potential null pointer exceptions",
                "Inefficient database queries",
            ]),
        }
    }
}

/// Report printed by the feature complexity CLI.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureComplexityReport {
    pub complexity: String,
    #[serde(deserialize_with = "whole_number")]
    pub story_points: u32,
    pub affected_modules: Vec<String>,
    pub subtasks: Vec<String>,
    pub refactors: Vec<String>,
    pub risks: Vec<String>,
}

impl FeatureComplexityReport {
    pub fn fallback() -> Self {
        Self {
            complexity: ComplexityLevel::Medium.to_string(),
            story_points: 5,
            affected_modules: Vec::new(),
            subtasks: Vec::new(),
            refactors: Vec::new(),
            risks: strings(&["Complexity analysis response could not be parsed"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let report: AmbiguityReport = serde_json::from_str(r#"{"analysis":"ok"}"#).unwrap();
        assert_eq!(report.analysis, "ok");
        assert!(report.ambiguity_categories.is_empty());
        assert_eq!(report.confidence_score, 0.0);
    }

    #[test]
    fn story_points_omit_absent_developer_factors() {
        let json = serde_json::to_value(StoryPointEstimate::fallback()).unwrap();
        assert_eq!(json["storyPoints"], 5);
        assert_eq!(json["complexity"], "Medium");
        assert!(json.get("developerFactors").is_none());
    }

    #[test]
    fn feature_report_serializes_camel_case() {
        let report = FeatureComplexityReport {
            complexity: "High".into(),
            story_points: 8,
            affected_modules: vec!["AuthService".into()],
            ..Default::default()
        };
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["storyPoints"], 8);
        assert_eq!(json["affectedModules"][0], "AuthService");
    }

    #[test]
    fn scope_rejects_unknown_complexity() {
        let result =
            serde_json::from_str::<ScopeEstimate>(r#"{"complexityLevel":"Enormous"}"#);
        assert!(result.is_err());
    }
}
