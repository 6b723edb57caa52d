//! Analysis command handlers.
//!
//! Each handler loads its subject, runs one RequirementAnalyzer task and,
//! for ambiguity, scope and plan results, persists the outcome.

mod analyze_repository;
mod calculate_story_points;
mod detect_ambiguities;
mod estimate_scope;
mod generate_plan;

pub use analyze_repository::{AnalyzeRepositoryCommand, AnalyzeRepositoryHandler};
pub use calculate_story_points::{CalculateStoryPointsCommand, CalculateStoryPointsHandler};
pub use detect_ambiguities::{DetectAmbiguitiesCommand, DetectAmbiguitiesHandler};
pub use estimate_scope::{EstimateScopeCommand, EstimateScopeHandler};
pub use generate_plan::{GeneratePlanCommand, GeneratePlanHandler};
