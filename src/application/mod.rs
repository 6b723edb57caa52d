//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) and query handlers (read) live side by side per
//! area; the clarification workflow and the analyzer are shared services.

pub mod clarification;
pub mod handlers;
mod requirement_analyzer;
#[cfg(test)]
pub(crate) mod test_support;

pub use clarification::{ComplexityAnalyzer, FeatureClarifier, MAX_ROUNDS};
pub use requirement_analyzer::RequirementAnalyzer;
