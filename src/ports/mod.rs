//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## LLM and Retrieval Ports
//!
//! - `AIProvider` - Wire-level chat completion against a hosted model
//! - `LanguageModel` - Prompt in, text out; never fails outward
//! - `ContextSearch` - Code snippet retrieval for grounding prompts
//! - `Interviewer` - The person answering clarifying questions
//!
//! ## Persistence Ports
//!
//! - `RequirementRepository`, `AnalysisRepository`
//! - `DeveloperRepository`
//! - `TicketRepository`
//!
//! ## Integration Ports
//!
//! - `IssueTracker` - External ticket creation

mod ai_provider;
mod analysis_repository;
mod context_search;
mod developer_repository;
mod interviewer;
mod issue_tracker;
mod language_model;
mod requirement_repository;
mod ticket_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, TokenUsage,
};
pub use analysis_repository::AnalysisRepository;
pub use context_search::ContextSearch;
pub use developer_repository::DeveloperRepository;
pub use interviewer::Interviewer;
pub use issue_tracker::IssueTracker;
pub use language_model::LanguageModel;
pub use requirement_repository::RequirementRepository;
pub use ticket_repository::TicketRepository;
