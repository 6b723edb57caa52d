//! Offline language model with fixed answers.
//!
//! Lets the feature complexity CLI run end to end without a provider key.
//! It asks exactly one clarifying question and then returns a fixed
//! complexity report.

use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::LanguageModel;

const CLARIFYING_QUESTION: &str = "Which user role is this feature for?";
const NO_RESPONSE: &str = "I don't have a specific response for this prompt.";

/// Deterministic stand-in for a hosted model.
#[derive(Debug, Default)]
pub struct CannedLanguageModel {
    calls: AtomicUsize,
}

impl CannedLanguageModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn complexity_report() -> String {
        json!({
            "complexity": "Medium",
            "storyPoints": 5,
            "affectedModules": ["UserModule", "AuthService"],
            "subtasks": ["Update user schema", "Modify login flow"],
            "refactors": ["Refactor user service abstraction"],
            "risks": ["Potential auth timeout issues"]
        })
        .to_string()
    }
}

#[async_trait]
impl LanguageModel for CannedLanguageModel {
    async fn ask(&self, prompt: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let prompt = prompt.to_lowercase();

        if prompt.contains("identify ambiguities") {
            if prompt.contains("clarification:") {
                "None".to_string()
            } else {
                CLARIFYING_QUESTION.to_string()
            }
        } else if prompt.contains("analyze the following feature request") {
            Self::complexity_report()
        } else {
            NO_RESPONSE.to_string()
        }
    }
}
