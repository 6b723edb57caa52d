//! Developer profile entity.

use crate::domain::foundation::{DeveloperId, DomainError, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Editable fields of a developer profile.
///
/// Used for both creation and full replacement on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperProfileData {
    pub name: String,
    pub experience_level: String,
    pub productivity_factor: f64,
    pub skills: Vec<String>,
    pub preferred_work_hours_per_day: f64,
}

impl DeveloperProfileData {
    /// Check the profile invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.experience_level.trim().is_empty() {
            return Err(ValidationError::empty_field("experience_level"));
        }
        if self.productivity_factor.is_nan() || self.productivity_factor <= 0.0 {
            return Err(ValidationError::not_positive(
                "productivity_factor",
                self.productivity_factor,
            ));
        }
        if self.preferred_work_hours_per_day.is_nan() || self.preferred_work_hours_per_day <= 0.0 {
            return Err(ValidationError::not_positive(
                "preferred_work_hours_per_day",
                self.preferred_work_hours_per_day,
            ));
        }
        Ok(())
    }
}

/// A developer whose profile can adjust estimates.
///
/// # Invariants
///
/// - `name` and `experience_level` are non-blank
/// - `productivity_factor > 0`
/// - `preferred_work_hours_per_day > 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    id: DeveloperId,
    data: DeveloperProfileData,
    created_at: Timestamp,
}

impl DeveloperProfile {
    /// Create a new profile after validating its fields.
    pub fn new(data: DeveloperProfileData) -> Result<Self, DomainError> {
        data.validate()?;
        Ok(Self {
            id: DeveloperId::new(),
            data,
            created_at: Timestamp::now(),
        })
    }

    /// Replace all editable fields. Identity and creation time are kept.
    pub fn replace(&mut self, data: DeveloperProfileData) -> Result<(), DomainError> {
        data.validate()?;
        self.data = data;
        Ok(())
    }

    pub fn id(&self) -> &DeveloperId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn experience_level(&self) -> &str {
        &self.data.experience_level
    }

    pub fn productivity_factor(&self) -> f64 {
        self.data.productivity_factor
    }

    pub fn skills(&self) -> &[String] {
        &self.data.skills
    }

    pub fn preferred_work_hours_per_day(&self) -> f64 {
        self.data.preferred_work_hours_per_day
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.data
            .name
            .to_lowercase()
            .contains(&fragment.to_lowercase())
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.data.skills.iter().any(|s| s == skill)
    }
}
