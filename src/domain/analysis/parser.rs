//! Decoding of model answers into typed reports.
//!
//! Models are asked for a bare JSON object but answer informally often
//! enough that decoding must never fail the calling operation. Any answer
//! that is not a JSON object of the expected shape is replaced by the
//! task's fallback report and a warning is logged.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

use super::{
    AmbiguityReport, FeatureComplexityReport, PlanDraft, RepositoryAssessment, ScopeEstimate,
    StoryPointEstimate,
};

/// The LLM tasks whose answers are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Ambiguity,
    Scope,
    ImplementationPlan,
    StoryPoints,
    RepositoryAnalysis,
    FeatureComplexity,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskKind::Ambiguity => "ambiguity_detection",
            TaskKind::Scope => "scope_estimation",
            TaskKind::ImplementationPlan => "implementation_plan",
            TaskKind::StoryPoints => "story_points",
            TaskKind::RepositoryAnalysis => "repository_analysis",
            TaskKind::FeatureComplexity => "feature_complexity",
        };
        f.write_str(s)
    }
}

/// A parsed answer, tagged by task.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRecord {
    Ambiguity(AmbiguityReport),
    Scope(ScopeEstimate),
    ImplementationPlan(PlanDraft),
    StoryPoints(StoryPointEstimate),
    RepositoryAnalysis(RepositoryAssessment),
    FeatureComplexity(FeatureComplexityReport),
}

impl AnalysisRecord {
    pub fn kind(&self) -> TaskKind {
        match self {
            AnalysisRecord::Ambiguity(_) => TaskKind::Ambiguity,
            AnalysisRecord::Scope(_) => TaskKind::Scope,
            AnalysisRecord::ImplementationPlan(_) => TaskKind::ImplementationPlan,
            AnalysisRecord::StoryPoints(_) => TaskKind::StoryPoints,
            AnalysisRecord::RepositoryAnalysis(_) => TaskKind::RepositoryAnalysis,
            AnalysisRecord::FeatureComplexity(_) => TaskKind::FeatureComplexity,
        }
    }
}

/// A report type produced by one task.
pub trait TaskReport: DeserializeOwned + Sized {
    const KIND: TaskKind;

    /// Keys that must hold a list but may arrive as a single value.
    const LIST_FIELDS: &'static [&'static str] = &[];

    fn fallback() -> Self;

    fn into_record(self) -> AnalysisRecord;
}

impl TaskReport for AmbiguityReport {
    const KIND: TaskKind = TaskKind::Ambiguity;

    fn fallback() -> Self {
        AmbiguityReport::fallback()
    }

    fn into_record(self) -> AnalysisRecord {
        AnalysisRecord::Ambiguity(self)
    }
}

impl TaskReport for ScopeEstimate {
    const KIND: TaskKind = TaskKind::Scope;

    fn fallback() -> Self {
        ScopeEstimate::fallback()
    }

    fn into_record(self) -> AnalysisRecord {
        AnalysisRecord::Scope(self)
    }
}

impl TaskReport for PlanDraft {
    const KIND: TaskKind = TaskKind::ImplementationPlan;
    const LIST_FIELDS: &'static [&'static str] = &["implementationSteps"];

    fn fallback() -> Self {
        PlanDraft::fallback()
    }

    fn into_record(self) -> AnalysisRecord {
        AnalysisRecord::ImplementationPlan(self)
    }
}

impl TaskReport for StoryPointEstimate {
    const KIND: TaskKind = TaskKind::StoryPoints;
    const LIST_FIELDS: &'static [&'static str] = &["considerations"];

    fn fallback() -> Self {
        StoryPointEstimate::fallback()
    }

    fn into_record(self) -> AnalysisRecord {
        AnalysisRecord::StoryPoints(self)
    }
}

impl TaskReport for RepositoryAssessment {
    const KIND: TaskKind = TaskKind::RepositoryAnalysis;
    const LIST_FIELDS: &'static [&'static str] = &["potentialIssues"];

    fn fallback() -> Self {
        RepositoryAssessment::fallback()
    }

    fn into_record(self) -> AnalysisRecord {
        AnalysisRecord::RepositoryAnalysis(self)
    }
}

impl TaskReport for FeatureComplexityReport {
    const KIND: TaskKind = TaskKind::FeatureComplexity;

    fn fallback() -> Self {
        FeatureComplexityReport::fallback()
    }

    fn into_record(self) -> AnalysisRecord {
        AnalysisRecord::FeatureComplexity(self)
    }
}

/// Parse a raw model answer for the given task.
pub fn parse(raw: &str, kind: TaskKind) -> AnalysisRecord {
    match kind {
        TaskKind::Ambiguity => parse_as::<AmbiguityReport>(raw).into_record(),
        TaskKind::Scope => parse_as::<ScopeEstimate>(raw).into_record(),
        TaskKind::ImplementationPlan => parse_as::<PlanDraft>(raw).into_record(),
        TaskKind::StoryPoints => parse_as::<StoryPointEstimate>(raw).into_record(),
        TaskKind::RepositoryAnalysis => parse_as::<RepositoryAssessment>(raw).into_record(),
        TaskKind::FeatureComplexity => parse_as::<FeatureComplexityReport>(raw).into_record(),
    }
}

/// Parse a raw model answer into a specific report type, substituting the
/// report's fallback on any decoding failure.
pub fn parse_as<R: TaskReport>(raw: &str) -> R {
    let kind = R::KIND;
    match decode::<R>(raw) {
        Ok(report) => {
            tracing::debug!(task = %kind, "Parsed model response");
            report
        }
        Err(e) => {
            tracing::warn!(task = %kind, error = %e, "Failed to parse model response, using fallback");
            R::fallback()
        }
    }
}

fn decode<R: TaskReport>(raw: &str) -> Result<R, serde_json::Error> {
    let mut object: Map<String, Value> = serde_json::from_str(raw.trim())?;
    for field in R::LIST_FIELDS {
        coerce_to_list(&mut object, field);
    }
    serde_json::from_value(Value::Object(object))
}

/// Wrap a scalar value in a single-element list. Null counts as absent.
fn coerce_to_list(object: &mut Map<String, Value>, field: &str) {
    let item = match object.get(field) {
        None | Some(Value::Array(_)) => return,
        Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };
    match item {
        None => {
            object.remove(field);
        }
        Some(text) => {
            tracing::debug!(field, "Converting scalar to list");
            object.insert(field.to_string(), Value::Array(vec![Value::String(text)]));
        }
    }
}
