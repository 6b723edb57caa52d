//! Ticket module - issue tracker tickets derived from requirements.

mod jira_ticket;

pub use jira_ticket::{story_points_for_clarity, JiraTicket, NewTicket};
