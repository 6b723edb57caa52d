//! Issue tracker configuration

use serde::Deserialize;

/// Jira connection settings. All optional; tickets are still stored
/// locally when the tracker is not configured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraConfig {
    pub api_url: Option<String>,
    pub username: Option<String>,
    pub api_token: Option<String>,
    pub project_key: Option<String>,
}

impl JiraConfig {
    /// True when url, username and token are all non-empty.
    pub fn is_configured(&self) -> bool {
        [&self.api_url, &self.username, &self.api_token]
            .iter()
            .all(|v| v.as_ref().is_some_and(|s| !s.trim().is_empty()))
    }
}
