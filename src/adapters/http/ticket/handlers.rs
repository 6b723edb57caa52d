//! HTTP handlers for ticket endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, invalid_id};
use crate::application::handlers::ticket::{
    CreateTicketCommand, CreateTicketHandler, GetTicketHandler, GetTicketQuery,
    ListTicketsHandler, TicketFilter,
};
use crate::domain::foundation::{DeveloperId, RequirementId, TicketId};

use super::dto::{CreateTicketRequest, TicketResponse};

#[derive(Clone)]
pub struct TicketHandlers {
    create_handler: Arc<CreateTicketHandler>,
    get_handler: Arc<GetTicketHandler>,
    list_handler: Arc<ListTicketsHandler>,
}

impl TicketHandlers {
    pub fn new(
        create_handler: Arc<CreateTicketHandler>,
        get_handler: Arc<GetTicketHandler>,
        list_handler: Arc<ListTicketsHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
        }
    }
}

/// POST /api/jira/tickets
pub async fn create_ticket(
    State(handlers): State<TicketHandlers>,
    Json(req): Json<CreateTicketRequest>,
) -> Response {
    let Ok(requirement_id) = req.requirement_id.parse::<RequirementId>() else {
        return invalid_id("requirement");
    };
    let assigned_developer_id = match req.assigned_developer_id.as_deref() {
        None | Some("") => None,
        Some(raw) => match raw.parse::<DeveloperId>() {
            Ok(id) => Some(id),
            Err(_) => return invalid_id("developer"),
        },
    };

    let cmd = CreateTicketCommand {
        requirement_id,
        ticket_type: req.ticket_type,
        priority: req.priority,
        assigned_developer_id,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(ticket) => (StatusCode::CREATED, Json(TicketResponse::from(ticket))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/jira/tickets/:id
pub async fn get_ticket(
    State(handlers): State<TicketHandlers>,
    Path(ticket_id): Path<String>,
) -> Response {
    let Ok(ticket_id) = ticket_id.parse::<TicketId>() else {
        return invalid_id("ticket");
    };

    match handlers.get_handler.handle(GetTicketQuery { ticket_id }).await {
        Ok(ticket) => Json(TicketResponse::from(ticket)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/jira/tickets
pub async fn list_tickets(State(handlers): State<TicketHandlers>) -> Response {
    list_response(&handlers, TicketFilter::All).await
}

/// GET /api/jira/tickets/requirement/:id
pub async fn tickets_for_requirement(
    State(handlers): State<TicketHandlers>,
    Path(requirement_id): Path<String>,
) -> Response {
    let Ok(requirement_id) = requirement_id.parse::<RequirementId>() else {
        return invalid_id("requirement");
    };
    list_response(&handlers, TicketFilter::Requirement(requirement_id)).await
}

/// GET /api/jira/tickets/developer/:id
pub async fn tickets_for_developer(
    State(handlers): State<TicketHandlers>,
    Path(developer_id): Path<String>,
) -> Response {
    let Ok(developer_id) = developer_id.parse::<DeveloperId>() else {
        return invalid_id("developer");
    };
    list_response(&handlers, TicketFilter::Developer(developer_id)).await
}

async fn list_response(handlers: &TicketHandlers, filter: TicketFilter) -> Response {
    match handlers.list_handler.handle(filter).await {
        Ok(tickets) => {
            let body: Vec<TicketResponse> = tickets.into_iter().map(TicketResponse::from).collect();
            Json(body).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
