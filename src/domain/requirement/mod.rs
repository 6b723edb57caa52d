//! Requirement module - stored feature descriptions.

mod aggregate;
mod source_type;

pub use aggregate::{Requirement, SourceFile};
pub use source_type::SourceType;
