//! Shared fixtures for application tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::adapters::memory::{
    InMemoryAnalysisRepository, InMemoryDeveloperRepository, InMemoryRequirementRepository,
    InMemoryTicketRepository,
};
use crate::domain::developer::{DeveloperProfile, DeveloperProfileData};
use crate::domain::requirement::Requirement;
use crate::ports::{DeveloperRepository, LanguageModel, RequirementRepository};

/// Language model that always gives the same answer and records prompts.
pub struct FixedModel {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl FixedModel {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for FixedModel {
    async fn ask(&self, prompt: &str) -> String {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}

pub struct Stores {
    pub requirements: Arc<InMemoryRequirementRepository>,
    pub developers: Arc<InMemoryDeveloperRepository>,
    pub analyses: Arc<InMemoryAnalysisRepository>,
    pub tickets: Arc<InMemoryTicketRepository>,
}

impl Stores {
    pub fn new() -> Self {
        Self {
            requirements: Arc::new(InMemoryRequirementRepository::new()),
            developers: Arc::new(InMemoryDeveloperRepository::new()),
            analyses: Arc::new(InMemoryAnalysisRepository::new()),
            tickets: Arc::new(InMemoryTicketRepository::new()),
        }
    }

    pub async fn requirement(&self, content: &str, clarity_score: Option<f64>) -> Requirement {
        let requirement =
            Requirement::from_text("Requirement".to_string(), content.to_string(), clarity_score)
                .unwrap();
        self.requirements.save(requirement).await.unwrap()
    }

    pub async fn developer(&self, name: &str) -> DeveloperProfile {
        let profile = DeveloperProfile::new(developer_data(name)).unwrap();
        self.developers.save(&profile).await.unwrap();
        profile
    }
}

pub fn developer_data(name: &str) -> DeveloperProfileData {
    DeveloperProfileData {
        name: name.to_string(),
        experience_level: "Senior".to_string(),
        productivity_factor: 1.2,
        skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        preferred_work_hours_per_day: 6.0,
    }
}
