//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - language model providers and the offline canned model
//! - `search` - code context search (in-memory stub, remote vector service)
//! - `memory` - in-memory repositories
//! - `jira` - issue tracker stand-in
//! - `console` - terminal interviewer for the CLI
//! - `http` - REST API

pub mod ai;
pub mod console;
pub mod http;
pub mod jira;
pub mod memory;
pub mod search;
