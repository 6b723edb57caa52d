//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONTEXT_COACH` prefix and nested values are separated by double underscores.
//!
//! Two unprefixed variables are honoured for the context search backend:
//! `USE_REAL_VECTOR_DB` and `VECTOR_DB_API_URL`. When set they take precedence
//! over their prefixed equivalents.
//!
//! # Example
//!
//! ```no_run
//! use context_coach::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod context_search;
mod error;
mod jira;
mod server;

pub use ai::AiConfig;
pub use context_search::ContextSearchConfig;
pub use error::{ConfigError, ValidationError};
pub use jira::JiraConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::env;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// offline setup: stub context search, canned language model, no tracker.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// LLM provider configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Code context search backend
    #[serde(default)]
    pub context_search: ContextSearchConfig,

    /// Issue tracker credentials
    #[serde(default)]
    pub jira: JiraConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONTEXT_COACH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Applies `USE_REAL_VECTOR_DB` / `VECTOR_DB_API_URL` overrides
    ///
    /// # Environment Variable Format
    ///
    /// - `CONTEXT_COACH__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONTEXT_COACH__AI__API_KEY=...` -> `ai.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let use_real_vector_db = env::var("USE_REAL_VECTOR_DB")
            .ok()
            .map(|v| v.trim().eq_ignore_ascii_case("true"));
        let vector_db_api_url = env::var("VECTOR_DB_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONTEXT_COACH")
                    .separator("__"),
            )
            .set_override_option("context_search.use_real_vector_db", use_real_vector_db)?
            .set_override_option("context_search.vector_db_api_url", vector_db_api_url)?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.context_search.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "CONTEXT_COACH__SERVER__PORT",
        "CONTEXT_COACH__SERVER__ENVIRONMENT",
        "CONTEXT_COACH__AI__API_KEY",
        "CONTEXT_COACH__AI__MAX_ATTEMPTS",
        "CONTEXT_COACH__CONTEXT_SEARCH__USE_REAL_VECTOR_DB",
        "CONTEXT_COACH__JIRA__API_URL",
        "USE_REAL_VECTOR_DB",
        "VECTOR_DB_API_URL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_loads_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(!config.context_search.use_real_vector_db);
        assert_eq!(config.context_search.vector_db_api_url, "http://localhost:5000");
        assert_eq!(config.ai.max_attempts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prefixed_values_are_read() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CONTEXT_COACH__SERVER__PORT", "3000");
        env::set_var("CONTEXT_COACH__SERVER__ENVIRONMENT", "production");
        env::set_var("CONTEXT_COACH__AI__API_KEY", "sk-test");
        env::set_var("CONTEXT_COACH__JIRA__API_URL", "https://jira.example.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert!(config.ai.has_api_key());
        assert_eq!(config.jira.api_url.as_deref(), Some("https://jira.example.com"));
    }

    #[test]
    fn test_legacy_vector_db_variables_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("USE_REAL_VECTOR_DB", "TRUE");
        env::set_var("VECTOR_DB_API_URL", "http://search.internal:9000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.context_search.use_real_vector_db);
        assert_eq!(config.context_search.vector_db_api_url, "http://search.internal:9000");
    }

    #[test]
    fn test_non_true_flag_means_stub_search() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CONTEXT_COACH__CONTEXT_SEARCH__USE_REAL_VECTOR_DB", "true");
        env::set_var("USE_REAL_VECTOR_DB", "yes");
        let result = AppConfig::load();
        clear_env();

        assert!(!result.unwrap().context_search.use_real_vector_db);
    }
}
