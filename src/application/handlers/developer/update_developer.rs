//! UpdateDeveloperHandler - replaces every editable field of a profile.

use std::sync::Arc;

use super::find_developer;
use crate::domain::developer::{DeveloperProfile, DeveloperProfileData};
use crate::domain::foundation::{DeveloperId, DomainError};
use crate::ports::DeveloperRepository;

#[derive(Debug, Clone)]
pub struct UpdateDeveloperCommand {
    pub developer_id: DeveloperId,
    pub profile: DeveloperProfileData,
}

pub struct UpdateDeveloperHandler {
    repository: Arc<dyn DeveloperRepository>,
}

impl UpdateDeveloperHandler {
    pub fn new(repository: Arc<dyn DeveloperRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateDeveloperCommand) -> Result<DeveloperProfile, DomainError> {
        let mut profile = find_developer(self.repository.as_ref(), &cmd.developer_id).await?;
        profile.replace(cmd.profile)?;
        self.repository.save(&profile).await?;
        tracing::info!(developer_id = %cmd.developer_id, "Developer profile updated");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{developer_data, Stores};
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn replaces_fields_and_keeps_identity() {
        let stores = Stores::new();
        let original = stores.developer("Alice").await;
        let mut data = developer_data("Alice Cooper");
        data.skills = vec!["Go".to_string()];

        let updated = UpdateDeveloperHandler::new(stores.developers.clone())
            .handle(UpdateDeveloperCommand { developer_id: *original.id(), profile: data })
            .await
            .unwrap();

        assert_eq!(updated.id(), original.id());
        assert_eq!(updated.created_at(), original.created_at());
        assert_eq!(updated.skills(), ["Go".to_string()]);

        let stored = stores.developers.find_by_id(original.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Alice Cooper");
    }

    #[tokio::test]
    async fn invalid_update_leaves_profile_untouched() {
        let stores = Stores::new();
        let original = stores.developer("Alice").await;
        let mut data = developer_data("Alice");
        data.preferred_work_hours_per_day = -1.0;

        let err = UpdateDeveloperHandler::new(stores.developers.clone())
            .handle(UpdateDeveloperCommand { developer_id: *original.id(), profile: data })
            .await
            .unwrap_err();

        assert!(err.is_validation());
        let stored = stores.developers.find_by_id(original.id()).await.unwrap().unwrap();
        assert_eq!(stored, original);
    }

    #[tokio::test]
    async fn unknown_developer_is_not_found() {
        let stores = Stores::new();
        let err = UpdateDeveloperHandler::new(stores.developers.clone())
            .handle(UpdateDeveloperCommand {
                developer_id: DeveloperId::new(),
                profile: developer_data("Ghost"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DeveloperNotFound);
    }
}
