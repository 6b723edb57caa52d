//! LanguageModel port - prompt in, text out.

use async_trait::async_trait;

/// Text-completion client used by every LLM task.
///
/// Implementations never fail outward. Transport or provider failures are
/// returned as text starting with `"Error: "`, which answer parsing then
/// treats like any other unusable answer.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn ask(&self, prompt: &str) -> String;
}
