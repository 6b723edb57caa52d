//! IssueTracker port - filing tickets in an external tracker.

use async_trait::async_trait;

use crate::domain::{foundation::DomainError, ticket::JiraTicket};

/// External issue tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// True when credentials and endpoint are available.
    fn is_configured(&self) -> bool;

    /// File the ticket and return the tracker's id for it.
    async fn create_issue(&self, ticket: &JiraTicket) -> Result<String, DomainError>;
}
