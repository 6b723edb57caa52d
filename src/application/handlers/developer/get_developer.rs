//! Developer profile queries by id and in full.

use std::sync::Arc;

use crate::domain::developer::DeveloperProfile;
use crate::domain::foundation::{DeveloperId, DomainError, ErrorCode};
use crate::ports::DeveloperRepository;

#[derive(Debug, Clone)]
pub struct GetDeveloperQuery {
    pub developer_id: DeveloperId,
}

pub struct GetDeveloperHandler {
    repository: Arc<dyn DeveloperRepository>,
}

impl GetDeveloperHandler {
    pub fn new(repository: Arc<dyn DeveloperRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDeveloperQuery) -> Result<DeveloperProfile, DomainError> {
        find_developer(self.repository.as_ref(), &query.developer_id).await
    }
}

pub struct ListDevelopersHandler {
    repository: Arc<dyn DeveloperRepository>,
}

impl ListDevelopersHandler {
    pub fn new(repository: Arc<dyn DeveloperRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<DeveloperProfile>, DomainError> {
        self.repository.find_all().await
    }
}

/// Loads a developer or fails with `DeveloperNotFound`.
pub(crate) async fn find_developer(
    repository: &dyn DeveloperRepository,
    id: &DeveloperId,
) -> Result<DeveloperProfile, DomainError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(ErrorCode::DeveloperNotFound, "Developer", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::Stores;

    #[tokio::test]
    async fn get_and_list() {
        let stores = Stores::new();
        let alice = stores.developer("Alice").await;
        stores.developer("Bob").await;

        let found = GetDeveloperHandler::new(stores.developers.clone())
            .handle(GetDeveloperQuery { developer_id: *alice.id() })
            .await
            .unwrap();
        assert_eq!(found, alice);

        let all = ListDevelopersHandler::new(stores.developers.clone()).handle().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn missing_developer_message_names_id() {
        let stores = Stores::new();
        let id = DeveloperId::new();

        let err = GetDeveloperHandler::new(stores.developers.clone())
            .handle(GetDeveloperQuery { developer_id: id })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DeveloperNotFound);
        assert!(err.message.contains(&id.to_string()));
    }
}
