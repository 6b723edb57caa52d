//! In-memory context search returning fixed placeholder snippets.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::ContextSearch;

const SNIPPET_BODIES: [&str; 3] = [
    "pub struct UserService {\n    repository: Arc<dyn UserRepository>,\n}\n\n\
     impl UserService {\n    pub async fn find_user_by_id(&self, id: &UserId) -> Option<User> {\n        \
     self.repository.find_by_id(id).await\n    }\n}",
    "#[async_trait]\npub trait UserRepository: Send + Sync {\n    \
     async fn find_by_id(&self, id: &UserId) -> Option<User>;\n    \
     async fn find_by_role(&self, role: &str) -> Vec<User>;\n}",
    "impl AuthenticationService {\n    \
     pub async fn authenticate(&self, username: &str, password: &str) -> bool {\n        \
     match self.users.find_by_username(username).await {\n            \
     Some(user) => self.hasher.verify(password, user.password_hash()),\n            \
     None => false,\n        }\n    }\n}",
];

/// Deterministic context search for offline runs and tests.
///
/// Returns `min(top_k, 3)` snippets, each headed by a comment that embeds
/// the query verbatim.
#[derive(Debug, Default)]
pub struct InMemoryContextSearch {
    calls: AtomicUsize,
}

impl InMemoryContextSearch {
    pub fn new() -> Self {
        tracing::info!("In-memory context search initialized");
        Self::default()
    }

    /// Number of searches performed so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContextSearch for InMemoryContextSearch {
    async fn search(&self, query: &str, top_k: usize) -> Vec<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(query, top_k, "Searching in-memory snippets");

        SNIPPET_BODIES
            .iter()
            .take(top_k)
            .enumerate()
            .map(|(i, body)| format!("// Dummy code snippet {} relevant to: {}\n{}", i + 1, query, body))
            .collect()
    }
}
