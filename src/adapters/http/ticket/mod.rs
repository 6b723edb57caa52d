//! HTTP adapter for ticket endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateTicketRequest, TicketResponse};
pub use handlers::TicketHandlers;
pub use routes::ticket_routes;
