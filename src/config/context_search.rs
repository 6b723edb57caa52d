//! Context search configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Selects and configures the code context search backend
#[derive(Debug, Clone, Deserialize)]
pub struct ContextSearchConfig {
    /// Use the remote vector search service instead of the in-memory stub
    #[serde(default)]
    pub use_real_vector_db: bool,

    /// Base URL of the vector search service
    #[serde(default = "default_api_url")]
    pub vector_db_api_url: String,

    /// Connect and read timeout for the health probe, in seconds
    #[serde(default = "default_health_timeout")]
    pub health_timeout_secs: u64,

    /// Command that starts a local search service when the probe fails
    pub companion_command: Option<String>,

    /// Seconds to wait after starting the companion before probing again
    #[serde(default = "default_startup_delay")]
    pub startup_delay_secs: u64,
}

impl ContextSearchConfig {
    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_secs(self.startup_delay_secs)
    }

    /// Companion command split into program and arguments, if configured.
    pub fn companion_argv(&self) -> Option<Vec<String>> {
        let argv: Vec<String> = self
            .companion_command
            .as_deref()?
            .split_whitespace()
            .map(str::to_string)
            .collect();
        (!argv.is_empty()).then_some(argv)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.use_real_vector_db
            && !(self.vector_db_api_url.starts_with("http://")
                || self.vector_db_api_url.starts_with("https://"))
        {
            return Err(ValidationError::InvalidUrl("VECTOR_DB_API_URL"));
        }
        if self.health_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ContextSearchConfig {
    fn default() -> Self {
        Self {
            use_real_vector_db: false,
            vector_db_api_url: default_api_url(),
            health_timeout_secs: default_health_timeout(),
            companion_command: None,
            startup_delay_secs: default_startup_delay(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_health_timeout() -> u64 {
    5
}

fn default_startup_delay() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_stub_search() {
        let config = ContextSearchConfig::default();
        assert!(!config.use_real_vector_db);
        assert_eq!(config.vector_db_api_url, "http://localhost:5000");
        assert_eq!(config.health_timeout(), Duration::from_secs(5));
        assert_eq!(config.startup_delay(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_companion_argv_splits_on_whitespace() {
        let config = ContextSearchConfig {
            companion_command: Some("python mock_vector_db_api.py --port 5000".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.companion_argv().unwrap(),
            vec!["python", "mock_vector_db_api.py", "--port", "5000"]
        );
    }

    #[test]
    fn test_blank_companion_is_none() {
        let config = ContextSearchConfig {
            companion_command: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.companion_argv().is_none());
    }

    #[test]
    fn test_remote_requires_http_url() {
        let config = ContextSearchConfig {
            use_real_vector_db: true,
            vector_db_api_url: "localhost:5000".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
