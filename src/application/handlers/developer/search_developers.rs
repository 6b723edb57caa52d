//! SearchDevelopersHandler - finds profiles by name, experience or skill.

use std::sync::Arc;

use crate::domain::developer::DeveloperProfile;
use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::DeveloperRepository;

/// Search criteria. Names match case-insensitively on any substring;
/// experience levels and skills match exactly.
#[derive(Debug, Clone)]
pub enum SearchDevelopersQuery {
    Name(String),
    ExperienceLevel(String),
    Skill(String),
}

impl SearchDevelopersQuery {
    fn term(&self) -> (&'static str, &str) {
        match self {
            Self::Name(name) => ("name", name),
            Self::ExperienceLevel(level) => ("experience_level", level),
            Self::Skill(skill) => ("skill", skill),
        }
    }
}

pub struct SearchDevelopersHandler {
    repository: Arc<dyn DeveloperRepository>,
}

impl SearchDevelopersHandler {
    pub fn new(repository: Arc<dyn DeveloperRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: SearchDevelopersQuery,
    ) -> Result<Vec<DeveloperProfile>, DomainError> {
        let (field, term) = query.term();
        if term.trim().is_empty() {
            return Err(ValidationError::empty_field(field).into());
        }

        match &query {
            SearchDevelopersQuery::Name(name) => self.repository.find_by_name_containing(name).await,
            SearchDevelopersQuery::ExperienceLevel(level) => {
                self.repository.find_by_experience_level(level).await
            }
            SearchDevelopersQuery::Skill(skill) => self.repository.find_by_skill(skill).await,
        }
    }
}
