//! LanguageModel backed by an AIProvider, with retry.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{AIError, AIProvider, CompletionRequest, LanguageModel};

/// How often and how patiently a prompt is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Delay after the first failure; doubled after each further failure.
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
        }
    }

    /// Delay before attempt `attempt + 1`, where `attempt` starts at 1.
    pub fn backoff_after(&self, attempt: u32) -> Duration {
        self.initial_backoff * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

impl Default for RetryPolicy {
    /// Three attempts, waiting 1s then 2s.
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

/// Sends each prompt as a single user message and returns the reply text.
///
/// Retryable provider errors are retried per the policy. When attempts run
/// out, or the error is permanent, the reply is `"Error: <message>"`.
pub struct ProviderLanguageModel {
    provider: Arc<dyn AIProvider>,
    policy: RetryPolicy,
}

impl ProviderLanguageModel {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    async fn complete_with_retry(&self, prompt: &str) -> Result<String, AIError> {
        let mut attempt = 1;
        loop {
            match self.provider.complete(CompletionRequest::from_prompt(prompt)).await {
                Ok(response) => return Ok(response.content),
                Err(err) if err.is_retryable() && attempt < self.policy.max_attempts => {
                    let delay = self.policy.backoff_after(attempt);
                    tracing::warn!(
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        error = %err,
                        "LLM call failed, retrying in {:?}",
                        delay
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[async_trait]
impl LanguageModel for ProviderLanguageModel {
    async fn ask(&self, prompt: &str) -> String {
        match self.complete_with_retry(prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(provider = %self.provider.provider_info().name, error = %err, "LLM call failed");
                format!("Error: {}", err)
            }
        }
    }
}
