//! Developer profile command and query handlers.

mod create_developer;
mod delete_developer;
mod get_developer;
mod search_developers;
mod update_developer;

pub use create_developer::{CreateDeveloperCommand, CreateDeveloperHandler};
pub use delete_developer::{DeleteDeveloperCommand, DeleteDeveloperHandler};
pub(crate) use get_developer::find_developer;
pub use get_developer::{GetDeveloperHandler, GetDeveloperQuery, ListDevelopersHandler};
pub use search_developers::{SearchDevelopersHandler, SearchDevelopersQuery};
pub use update_developer::{UpdateDeveloperCommand, UpdateDeveloperHandler};
