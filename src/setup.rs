//! Process wiring shared by the binaries: logging and adapter selection.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use crate::adapters::ai::{
    CannedLanguageModel, ChatCompletionConfig, ChatCompletionProvider, ProviderLanguageModel,
    RetryPolicy,
};
use crate::adapters::search::{InMemoryContextSearch, RemoteContextSearch};
use crate::config::{AiConfig, ContextSearchConfig, ServerConfig};
use crate::ports::{AIError, ContextSearch, LanguageModel};

/// Server logging: `RUST_LOG` wins, then the configured level. JSON lines in
/// production, human-readable output elsewhere.
pub fn init_server_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

/// CLI logging goes to stderr so stdout stays a clean conversation.
pub fn init_cli_tracing(verbose: bool) {
    let default = if verbose { "context_coach=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The hosted model when an API key is configured, the canned model otherwise.
pub fn language_model(config: &AiConfig) -> Result<Arc<dyn LanguageModel>, AIError> {
    let Some(provider_config) = ChatCompletionConfig::from_app_config(config) else {
        tracing::info!("No LLM API key configured, using canned responses");
        return Ok(Arc::new(CannedLanguageModel::new()));
    };

    let provider = ChatCompletionProvider::new(provider_config)?;
    tracing::info!(model = %config.model, "Using hosted language model");
    let policy = RetryPolicy::new(config.max_attempts, Duration::from_secs(1));
    Ok(Arc::new(
        ProviderLanguageModel::new(Arc::new(provider)).with_retry_policy(policy),
    ))
}

/// The remote vector search when enabled, the in-memory stub otherwise.
pub fn context_search(config: &ContextSearchConfig) -> Result<Arc<dyn ContextSearch>, reqwest::Error> {
    if config.use_real_vector_db {
        tracing::info!(url = %config.vector_db_api_url, "Using remote vector search");
        Ok(Arc::new(RemoteContextSearch::new(config)?))
    } else {
        tracing::info!("Using in-memory context search");
        Ok(Arc::new(InMemoryContextSearch::new()))
    }
}
