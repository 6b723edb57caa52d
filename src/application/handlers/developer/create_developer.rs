//! CreateDeveloperHandler - registers a developer profile.

use std::sync::Arc;

use crate::domain::developer::{DeveloperProfile, DeveloperProfileData};
use crate::domain::foundation::DomainError;
use crate::ports::DeveloperRepository;

#[derive(Debug, Clone)]
pub struct CreateDeveloperCommand {
    pub profile: DeveloperProfileData,
}

pub struct CreateDeveloperHandler {
    repository: Arc<dyn DeveloperRepository>,
}

impl CreateDeveloperHandler {
    pub fn new(repository: Arc<dyn DeveloperRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateDeveloperCommand) -> Result<DeveloperProfile, DomainError> {
        let profile = DeveloperProfile::new(cmd.profile)?;
        self.repository.save(&profile).await?;
        tracing::info!(developer_id = %profile.id(), "Developer profile created");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{developer_data, Stores};
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn creates_profile() {
        let stores = Stores::new();
        let handler = CreateDeveloperHandler::new(stores.developers.clone());

        let profile = handler
            .handle(CreateDeveloperCommand { profile: developer_data("Alice") })
            .await
            .unwrap();

        assert_eq!(profile.name(), "Alice");
        assert!(stores.developers.find_by_id(profile.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn zero_productivity_is_rejected_before_persistence() {
        let stores = Stores::new();
        let handler = CreateDeveloperHandler::new(stores.developers.clone());
        let mut data = developer_data("Alice");
        data.productivity_factor = 0.0;

        let err = handler
            .handle(CreateDeveloperCommand { profile: data })
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert!(stores.developers.find_all().await.unwrap().is_empty());
    }
}
