//! In-memory persistence adapters.
//!
//! Each repository keeps its entities behind a `tokio::sync::RwLock`.
//! Listings are ordered by creation time, oldest first.

mod analysis_repository;
mod developer_repository;
mod requirement_repository;
mod ticket_repository;

pub use analysis_repository::InMemoryAnalysisRepository;
pub use developer_repository::InMemoryDeveloperRepository;
pub use requirement_repository::InMemoryRequirementRepository;
pub use ticket_repository::InMemoryTicketRepository;
