//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod developer;
pub mod requirement;
pub mod ticket;
