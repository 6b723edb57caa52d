//! TicketRepository port for locally stored tickets.

use async_trait::async_trait;

use crate::domain::{
    foundation::{DeveloperId, DomainError, RequirementId, TicketId},
    ticket::JiraTicket,
};

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn save(&self, ticket: &JiraTicket) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &TicketId) -> Result<Option<JiraTicket>, DomainError>;

    async fn find_all(&self) -> Result<Vec<JiraTicket>, DomainError>;

    async fn find_by_requirement(
        &self,
        requirement_id: &RequirementId,
    ) -> Result<Vec<JiraTicket>, DomainError>;

    async fn find_by_developer(
        &self,
        developer_id: &DeveloperId,
    ) -> Result<Vec<JiraTicket>, DomainError>;
}
