//! Analysis module - LLM task prompts, answer parsing and stored results.

mod complexity;
mod parser;
pub mod prompts;
mod records;
mod reports;

pub use complexity::{ComplexityLevel, UnknownComplexityLevel};
pub use parser::{parse, parse_as, AnalysisRecord, TaskKind, TaskReport};
pub use records::{AmbiguityDetectionResult, ImplementationPlan, ScopeEstimationResult};
pub use reports::{
    AmbiguityReport, FeatureComplexityReport, PlanDraft, RepositoryAssessment, ScopeEstimate,
    StoryPointEstimate,
};
