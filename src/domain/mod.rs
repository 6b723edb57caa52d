//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `requirement` - Stored feature descriptions and their source type
//! - `analysis` - Prompts, model answer parsing and stored analysis results
//! - `developer` - Developer profiles used to tailor estimates
//! - `ticket` - Issue tracker tickets filed for requirements

pub mod analysis;
pub mod developer;
pub mod foundation;
pub mod requirement;
pub mod ticket;
