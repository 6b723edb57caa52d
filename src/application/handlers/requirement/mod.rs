//! Requirement command and query handlers.

mod create_requirement;
mod get_requirement;

pub use create_requirement::{
    CreateTextRequirementCommand, CreateTextRequirementHandler, UploadRequirementCommand,
    UploadRequirementHandler,
};
pub(crate) use get_requirement::find_requirement;
pub use get_requirement::{GetRequirementHandler, GetRequirementQuery, ListRequirementsHandler};
