//! Clarify-then-analyze workflow used by the feature complexity tool.

mod complexity_analyzer;
mod feature_clarifier;

pub use complexity_analyzer::ComplexityAnalyzer;
pub use feature_clarifier::{FeatureClarifier, MAX_ROUNDS};
