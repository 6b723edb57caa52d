//! ContextSearch port - retrieval of code snippets relevant to a query.

use async_trait::async_trait;

/// Looks up context snippets for a query.
///
/// Returns at most `top_k` snippets, best first. A failing backend yields an
/// empty list; search problems never abort the caller.
#[async_trait]
pub trait ContextSearch: Send + Sync {
    async fn search(&self, query: &str, top_k: usize) -> Vec<String>;
}
