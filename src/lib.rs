//! Context Coach - requirement analysis and feature clarification.
//!
//! Requirements are analyzed by a language model for ambiguities, scope,
//! implementation plans and story points. The feature complexity tool
//! clarifies a feature request with a human before assessing it against
//! retrieved code context.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod setup;
