//! HTTP DTOs for developer endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::developer::{DeveloperProfile, DeveloperProfileData};
use crate::domain::foundation::Timestamp;

/// Body of create and update requests. Update replaces every field.
#[derive(Debug, Clone, Deserialize)]
pub struct DeveloperProfileRequest {
    pub name: String,
    pub experience_level: String,
    pub productivity_factor: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    pub preferred_work_hours_per_day: f64,
}

impl From<DeveloperProfileRequest> for DeveloperProfileData {
    fn from(req: DeveloperProfileRequest) -> Self {
        Self {
            name: req.name,
            experience_level: req.experience_level,
            productivity_factor: req.productivity_factor,
            skills: req.skills,
            preferred_work_hours_per_day: req.preferred_work_hours_per_day,
        }
    }
}

/// Query string of the search endpoints; each endpoint reads its own key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "experienceLevel")]
    pub experience_level: String,
    #[serde(default)]
    pub skill: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeveloperResponse {
    pub id: String,
    pub name: String,
    pub experience_level: String,
    pub productivity_factor: f64,
    pub skills: Vec<String>,
    pub preferred_work_hours_per_day: f64,
    pub created_at: Timestamp,
}

impl From<DeveloperProfile> for DeveloperResponse {
    fn from(profile: DeveloperProfile) -> Self {
        Self {
            id: profile.id().to_string(),
            name: profile.name().to_string(),
            experience_level: profile.experience_level().to_string(),
            productivity_factor: profile.productivity_factor(),
            skills: profile.skills().to_vec(),
            preferred_work_hours_per_day: profile.preferred_work_hours_per_day(),
            created_at: *profile.created_at(),
        }
    }
}
