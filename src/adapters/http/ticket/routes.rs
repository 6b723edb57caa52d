//! HTTP routes for ticket endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_ticket, get_ticket, list_tickets, tickets_for_developer, tickets_for_requirement,
    TicketHandlers,
};

/// Ticket routes, nested under `/api/jira/tickets`.
pub fn ticket_routes(handlers: TicketHandlers) -> Router {
    Router::new()
        .route("/", get(list_tickets).post(create_ticket))
        .route("/requirement/:id", get(tickets_for_requirement))
        .route("/developer/:id", get(tickets_for_developer))
        .route("/:id", get(get_ticket))
        .with_state(handlers)
}
