//! Ticket command and query handlers.

mod create_ticket;
mod get_ticket;

pub use create_ticket::{CreateTicketCommand, CreateTicketHandler};
pub use get_ticket::{GetTicketHandler, GetTicketQuery, ListTicketsHandler, TicketFilter};
