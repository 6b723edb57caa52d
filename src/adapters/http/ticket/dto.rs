//! HTTP DTOs for ticket endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::ticket::JiraTicket;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTicketRequest {
    pub requirement_id: String,
    pub ticket_type: String,
    pub priority: String,
    #[serde(default)]
    pub assigned_developer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ticket_type: String,
    pub priority: String,
    pub estimated_story_points: Option<u32>,
    pub requirement_id: String,
    pub assigned_developer_id: Option<String>,
    pub external_ticket_id: Option<String>,
    pub created_at: Timestamp,
}

impl From<JiraTicket> for TicketResponse {
    fn from(ticket: JiraTicket) -> Self {
        Self {
            id: ticket.id().to_string(),
            title: ticket.title().to_string(),
            description: ticket.description().to_string(),
            ticket_type: ticket.ticket_type().to_string(),
            priority: ticket.priority().to_string(),
            estimated_story_points: ticket.estimated_story_points(),
            requirement_id: ticket.requirement_id().to_string(),
            assigned_developer_id: ticket.assigned_developer_id().map(ToString::to_string),
            external_ticket_id: ticket.external_ticket_id().map(str::to_string),
            created_at: *ticket.created_at(),
        }
    }
}
