//! DeleteDeveloperHandler - removes a profile permanently.

use std::sync::Arc;

use crate::domain::foundation::{DeveloperId, DomainError, ErrorCode};
use crate::ports::DeveloperRepository;

#[derive(Debug, Clone)]
pub struct DeleteDeveloperCommand {
    pub developer_id: DeveloperId,
}

pub struct DeleteDeveloperHandler {
    repository: Arc<dyn DeveloperRepository>,
}

impl DeleteDeveloperHandler {
    pub fn new(repository: Arc<dyn DeveloperRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteDeveloperCommand) -> Result<(), DomainError> {
        if !self.repository.delete(&cmd.developer_id).await? {
            return Err(DomainError::not_found(
                ErrorCode::DeveloperNotFound,
                "Developer",
                cmd.developer_id,
            ));
        }
        tracing::info!(developer_id = %cmd.developer_id, "Developer profile deleted");
        Ok(())
    }
}
