//! Issue tracker ticket entity.

use crate::domain::foundation::{
    DeveloperId, DomainError, RequirementId, TicketId, Timestamp, ValidationError,
};
use crate::domain::requirement::Requirement;
use serde::{Deserialize, Serialize};

/// Story points implied by a clarity score alone.
///
/// Less clear requirements carry more uncertainty and get larger estimates.
pub fn story_points_for_clarity(clarity_score: f64) -> u32 {
    if clarity_score < 0.3 {
        13
    } else if clarity_score < 0.5 {
        8
    } else if clarity_score < 0.7 {
        5
    } else if clarity_score < 0.9 {
        3
    } else {
        1
    }
}

/// Inputs for a new ticket.
#[derive(Debug, Clone)]
pub struct NewTicket<'a> {
    pub requirement: &'a Requirement,
    pub ticket_type: String,
    pub priority: String,
    pub assigned_developer_id: Option<DeveloperId>,
    pub estimated_story_points: Option<u32>,
}

/// A ticket filed for a requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JiraTicket {
    id: TicketId,
    title: String,
    description: String,
    ticket_type: String,
    priority: String,
    estimated_story_points: Option<u32>,
    requirement_id: RequirementId,
    assigned_developer_id: Option<DeveloperId>,
    external_ticket_id: Option<String>,
    created_at: Timestamp,
}

impl JiraTicket {
    /// Build a ticket whose title and description come from the requirement.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if ticket type or priority is blank
    pub fn new(input: NewTicket<'_>) -> Result<Self, DomainError> {
        if input.ticket_type.trim().is_empty() {
            return Err(ValidationError::empty_field("ticket_type").into());
        }
        if input.priority.trim().is_empty() {
            return Err(ValidationError::empty_field("priority").into());
        }

        Ok(Self {
            id: TicketId::new(),
            title: input.requirement.title().to_string(),
            description: Self::describe(input.requirement),
            ticket_type: input.ticket_type,
            priority: input.priority,
            estimated_story_points: input.estimated_story_points,
            requirement_id: *input.requirement.id(),
            assigned_developer_id: input.assigned_developer_id,
            external_ticket_id: None,
            created_at: Timestamp::now(),
        })
    }

    /// Tracker markup body for a requirement.
    fn describe(requirement: &Requirement) -> String {
        let mut description = format!("*Requirement:*\n{}\n\n", requirement.content());
        if let Some(score) = requirement.clarity_score() {
            description.push_str(&format!("*Clarity Score:* {}\n\n", score));
        }
        description
    }

    /// Record the id assigned by the external tracker.
    pub fn link_external(&mut self, external_id: String) {
        self.external_ticket_id = Some(external_id);
    }

    pub fn id(&self) -> &TicketId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ticket_type(&self) -> &str {
        &self.ticket_type
    }

    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn estimated_story_points(&self) -> Option<u32> {
        self.estimated_story_points
    }

    pub fn requirement_id(&self) -> &RequirementId {
        &self.requirement_id
    }

    pub fn assigned_developer_id(&self) -> Option<&DeveloperId> {
        self.assigned_developer_id.as_ref()
    }

    pub fn external_ticket_id(&self) -> Option<&str> {
        self.external_ticket_id.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
