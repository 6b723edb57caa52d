//! CreateTicketHandler - turns a requirement into an issue tracker ticket.
//!
//! Story points are only estimated for requirements with a clarity score.
//! With an assigned developer the estimate comes from the story point
//! analysis for that developer, otherwise from the clarity table.

use std::sync::Arc;

use crate::application::handlers::developer::find_developer;
use crate::application::handlers::requirement::find_requirement;
use crate::application::RequirementAnalyzer;
use crate::domain::developer::DeveloperProfile;
use crate::domain::foundation::{DeveloperId, DomainError, RequirementId, ValidationError};
use crate::domain::requirement::Requirement;
use crate::domain::ticket::{story_points_for_clarity, JiraTicket, NewTicket};
use crate::ports::{DeveloperRepository, IssueTracker, RequirementRepository, TicketRepository};

#[derive(Debug, Clone)]
pub struct CreateTicketCommand {
    pub requirement_id: RequirementId,
    pub ticket_type: String,
    pub priority: String,
    pub assigned_developer_id: Option<DeveloperId>,
}

impl CreateTicketCommand {
    /// Rejects blank ticket type or priority before any lookup or estimate.
    fn validate(&self) -> Result<(), ValidationError> {
        if self.ticket_type.trim().is_empty() {
            return Err(ValidationError::empty_field("ticket_type"));
        }
        if self.priority.trim().is_empty() {
            return Err(ValidationError::empty_field("priority"));
        }
        Ok(())
    }
}

pub struct CreateTicketHandler {
    requirements: Arc<dyn RequirementRepository>,
    developers: Arc<dyn DeveloperRepository>,
    tickets: Arc<dyn TicketRepository>,
    tracker: Arc<dyn IssueTracker>,
    analyzer: Arc<RequirementAnalyzer>,
}

impl CreateTicketHandler {
    pub fn new(
        requirements: Arc<dyn RequirementRepository>,
        developers: Arc<dyn DeveloperRepository>,
        tickets: Arc<dyn TicketRepository>,
        tracker: Arc<dyn IssueTracker>,
        analyzer: Arc<RequirementAnalyzer>,
    ) -> Self {
        Self {
            requirements,
            developers,
            tickets,
            tracker,
            analyzer,
        }
    }

    pub async fn handle(&self, cmd: CreateTicketCommand) -> Result<JiraTicket, DomainError> {
        cmd.validate()?;

        let requirement = find_requirement(self.requirements.as_ref(), &cmd.requirement_id).await?;
        let developer = match &cmd.assigned_developer_id {
            Some(id) => Some(find_developer(self.developers.as_ref(), id).await?),
            None => None,
        };

        let estimated_story_points = self.estimate(&requirement, developer.as_ref()).await?;

        let mut ticket = JiraTicket::new(NewTicket {
            requirement: &requirement,
            ticket_type: cmd.ticket_type,
            priority: cmd.priority,
            assigned_developer_id: cmd.assigned_developer_id,
            estimated_story_points,
        })?;

        if self.tracker.is_configured() {
            let external_id = self.tracker.create_issue(&ticket).await?;
            ticket.link_external(external_id);
        }

        self.tickets.save(&ticket).await?;
        tracing::info!(
            ticket_id = %ticket.id(),
            requirement_id = %cmd.requirement_id,
            external_id = ?ticket.external_ticket_id(),
            "Ticket created"
        );
        Ok(ticket)
    }

    async fn estimate(
        &self,
        requirement: &Requirement,
        developer: Option<&DeveloperProfile>,
    ) -> Result<Option<u32>, DomainError> {
        let Some(clarity) = requirement.clarity_score() else {
            return Ok(None);
        };
        match developer {
            Some(dev) => {
                let estimate = self
                    .analyzer
                    .calculate_story_points(requirement.content(), None, Some(dev))
                    .await?;
                Ok(Some(estimate.story_points))
            }
            None => Ok(Some(story_points_for_clarity(clarity))),
        }
    }
}
