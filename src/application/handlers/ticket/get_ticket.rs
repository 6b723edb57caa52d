//! Ticket queries.

use std::sync::Arc;

use crate::domain::foundation::{DeveloperId, DomainError, ErrorCode, RequirementId, TicketId};
use crate::domain::ticket::JiraTicket;
use crate::ports::TicketRepository;

#[derive(Debug, Clone)]
pub struct GetTicketQuery {
    pub ticket_id: TicketId,
}

pub struct GetTicketHandler {
    repository: Arc<dyn TicketRepository>,
}

impl GetTicketHandler {
    pub fn new(repository: Arc<dyn TicketRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetTicketQuery) -> Result<JiraTicket, DomainError> {
        self.repository
            .find_by_id(&query.ticket_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(ErrorCode::TicketNotFound, "Ticket", query.ticket_id)
            })
    }
}

/// Which tickets to list.
#[derive(Debug, Clone, Copy)]
pub enum TicketFilter {
    All,
    Requirement(RequirementId),
    Developer(DeveloperId),
}

pub struct ListTicketsHandler {
    repository: Arc<dyn TicketRepository>,
}

impl ListTicketsHandler {
    pub fn new(repository: Arc<dyn TicketRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, filter: TicketFilter) -> Result<Vec<JiraTicket>, DomainError> {
        match filter {
            TicketFilter::All => self.repository.find_all().await,
            TicketFilter::Requirement(id) => self.repository.find_by_requirement(&id).await,
            TicketFilter::Developer(id) => self.repository.find_by_developer(&id).await,
        }
    }
}
