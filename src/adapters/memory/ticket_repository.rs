//! In-memory implementation of TicketRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DeveloperId, DomainError, RequirementId, TicketId};
use crate::domain::ticket::JiraTicket;
use crate::ports::TicketRepository;

#[derive(Debug, Default)]
pub struct InMemoryTicketRepository {
    tickets: RwLock<HashMap<TicketId, JiraTicket>>,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered<F>(&self, keep: F) -> Vec<JiraTicket>
    where
        F: Fn(&JiraTicket) -> bool,
    {
        let mut matches: Vec<JiraTicket> = self
            .tickets
            .read()
            .await
            .values()
            .filter(|t| keep(t))
            .cloned()
            .collect();
        matches.sort_by_key(|t| *t.created_at());
        matches
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn save(&self, ticket: &JiraTicket) -> Result<(), DomainError> {
        self.tickets.write().await.insert(*ticket.id(), ticket.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TicketId) -> Result<Option<JiraTicket>, DomainError> {
        Ok(self.tickets.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<JiraTicket>, DomainError> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_requirement(
        &self,
        requirement_id: &RequirementId,
    ) -> Result<Vec<JiraTicket>, DomainError> {
        Ok(self.filtered(|t| t.requirement_id() == requirement_id).await)
    }

    async fn find_by_developer(
        &self,
        developer_id: &DeveloperId,
    ) -> Result<Vec<JiraTicket>, DomainError> {
        Ok(self
            .filtered(|t| t.assigned_developer_id() == Some(developer_id))
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requirement::Requirement;
    use crate::domain::ticket::NewTicket;

    #[tokio::test]
    async fn queries_by_requirement_and_developer() {
        let repo = InMemoryTicketRepository::new();
        let requirement = Requirement::from_text("Login".into(), "Users log in".into(), None).unwrap();
        let developer = DeveloperId::new();

        let assigned = JiraTicket::new(NewTicket {
            requirement: &requirement,
            ticket_type: "Story".to_string(),
            priority: "High".to_string(),
            assigned_developer_id: Some(developer),
            estimated_story_points: None,
        })
        .unwrap();
        let unassigned = JiraTicket::new(NewTicket {
            requirement: &requirement,
            ticket_type: "Task".to_string(),
            priority: "Low".to_string(),
            assigned_developer_id: None,
            estimated_story_points: None,
        })
        .unwrap();
        repo.save(&assigned).await.unwrap();
        repo.save(&unassigned).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
        assert_eq!(repo.find_by_requirement(requirement.id()).await.unwrap().len(), 2);

        let for_dev = repo.find_by_developer(&developer).await.unwrap();
        assert_eq!(for_dev.len(), 1);
        assert_eq!(for_dev[0].id(), assigned.id());

        assert!(repo.find_by_id(unassigned.id()).await.unwrap().is_some());
    }
}
