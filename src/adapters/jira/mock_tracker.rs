//! Issue tracker stand-in that mints local ids.
//!
//! Reports itself configured only when tracker credentials are present, so
//! tickets get external ids exactly when a real integration would run.

use async_trait::async_trait;
use chrono::Utc;

use crate::config::JiraConfig;
use crate::domain::foundation::DomainError;
use crate::domain::ticket::JiraTicket;
use crate::ports::IssueTracker;

#[derive(Debug, Clone)]
pub struct MockIssueTracker {
    configured: bool,
}

impl MockIssueTracker {
    pub fn new(configured: bool) -> Self {
        Self { configured }
    }

    pub fn from_config(config: &JiraConfig) -> Self {
        Self::new(config.is_configured())
    }
}

#[async_trait]
impl IssueTracker for MockIssueTracker {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn create_issue(&self, ticket: &JiraTicket) -> Result<String, DomainError> {
        let key = format!("MOCK-{}", Utc::now().timestamp_millis());
        tracing::info!(ticket_id = %ticket.id(), external_id = %key, "Created issue in tracker");
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requirement::Requirement;
    use crate::domain::ticket::NewTicket;

    #[test]
    fn configured_only_with_full_credentials() {
        let mut config = JiraConfig {
            api_url: Some("https://jira.example.com".to_string()),
            username: Some("bot".to_string()),
            api_token: None,
            project_key: None,
        };
        assert!(!MockIssueTracker::from_config(&config).is_configured());

        config.api_token = Some("token".to_string());
        assert!(MockIssueTracker::from_config(&config).is_configured());
    }

    #[tokio::test]
    async fn mints_mock_keys() {
        let requirement = Requirement::from_text("Login".into(), "Users log in".into(), None).unwrap();
        let ticket = JiraTicket::new(NewTicket {
            requirement: &requirement,
            ticket_type: "Story".to_string(),
            priority: "High".to_string(),
            assigned_developer_id: None,
            estimated_story_points: None,
        })
        .unwrap();

        let key = MockIssueTracker::new(true).create_issue(&ticket).await.unwrap();

        let millis = key.strip_prefix("MOCK-").unwrap();
        assert!(millis.parse::<i64>().is_ok());
    }
}
