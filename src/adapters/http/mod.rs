//! HTTP adapters - REST API implementations.
//!
//! Each area has its own dto/handlers/routes module; `app` assembles them
//! into one router.

pub mod analysis;
mod app;
pub mod developer;
pub mod error;
pub mod requirement;
pub mod ticket;

pub use app::{api_router, app, AppDependencies};
pub use error::ErrorResponse;
