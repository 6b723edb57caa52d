//! AI Provider Adapters.
//!
//! Implementations of the AIProvider and LanguageModel ports.
//!
//! ## Available Adapters
//!
//! - `ChatCompletionProvider` - OpenAI-compatible chat completions over HTTP
//! - `MockAIProvider` - Configurable mock for testing
//! - `ProviderLanguageModel` - LanguageModel over any AIProvider, with retry
//! - `CannedLanguageModel` - Offline model with fixed answers

mod canned_model;
mod chat_completion_provider;
mod mock_provider;
mod provider_language_model;

pub use canned_model::CannedLanguageModel;
pub use chat_completion_provider::{ChatCompletionConfig, ChatCompletionProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use provider_language_model::{ProviderLanguageModel, RetryPolicy};
