//! Context search adapters.

mod in_memory;
mod remote;

pub use in_memory::InMemoryContextSearch;
pub use remote::RemoteContextSearch;
