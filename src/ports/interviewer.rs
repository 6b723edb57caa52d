//! Interviewer port - the human side of feature clarification.

use async_trait::async_trait;

/// Puts a clarifying question to a person and returns their answer.
///
/// An empty answer means the person declined to clarify further.
#[async_trait]
pub trait Interviewer: Send + Sync {
    async fn ask(&self, question: &str) -> String;
}
