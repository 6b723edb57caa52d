//! FeatureClarifier - resolves ambiguities in a feature request by asking
//! a human the model's clarifying questions.

use std::sync::Arc;

use crate::domain::analysis::prompts;
use crate::ports::{ContextSearch, Interviewer, LanguageModel};

/// Upper bound on question rounds.
pub const MAX_ROUNDS: usize = 5;

/// Snippets retrieved per round.
const CONTEXT_SNIPPETS: usize = 5;

pub struct FeatureClarifier {
    search: Arc<dyn ContextSearch>,
    model: Arc<dyn LanguageModel>,
}

impl FeatureClarifier {
    pub fn new(search: Arc<dyn ContextSearch>, model: Arc<dyn LanguageModel>) -> Self {
        Self { search, model }
    }

    /// Returns the description extended with one `"\nClarification: "` line
    /// per accepted answer.
    ///
    /// Each round does one search and one model call. The loop ends early
    /// when the model's reply is blank or mentions "none" anywhere, or when
    /// the interviewer gives an empty answer.
    pub async fn clarify(&self, description: &str, interviewer: &dyn Interviewer) -> String {
        tracing::info!("Starting feature clarification");
        let mut current = description.to_string();

        for round in 1..=MAX_ROUNDS {
            tracing::debug!(round, "Clarification round");

            let context = self.search.search(&current, CONTEXT_SNIPPETS).await;
            tracing::debug!(snippets = context.len(), "Retrieved code context");

            let reply = self
                .model
                .ask(&prompts::clarification_question(&current, &context))
                .await;
            if is_settled(&reply) {
                tracing::info!(round, "No ambiguities found");
                break;
            }

            let answer = interviewer.ask(reply.trim()).await;
            let answer = answer.trim();
            if answer.is_empty() {
                tracing::info!(round, "No clarification provided");
                break;
            }

            current.push_str("\nClarification: ");
            current.push_str(answer);
        }

        tracing::info!("Feature clarification completed");
        current
    }
}

/// A reply settles the request when it is blank or contains "none".
fn is_settled(reply: &str) -> bool {
    reply.trim().is_empty() || reply.to_lowercase().contains("none")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::search::InMemoryContextSearch;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Replies from a script, then repeats the last entry.
    struct ScriptedModel {
        replies: Mutex<VecDeque<String>>,
        last: Mutex<String>,
        calls: AtomicUsize,
    }

    impl ScriptedModel {
        fn new(replies: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
                last: Mutex::new(String::new()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LanguageModel for ScriptedModel {
        async fn ask(&self, _prompt: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut last = self.last.lock().unwrap();
            if let Some(next) = self.replies.lock().unwrap().pop_front() {
                *last = next;
            }
            last.clone()
        }
    }

    struct ScriptedInterviewer {
        answers: Mutex<VecDeque<String>>,
        questions: Mutex<Vec<String>>,
    }

    impl ScriptedInterviewer {
        fn new<S: AsRef<str>>(answers: &[S]) -> Self {
            Self {
                answers: Mutex::new(answers.iter().map(|a| a.as_ref().to_string()).collect()),
                questions: Mutex::new(Vec::new()),
            }
        }

        fn questions(&self) -> Vec<String> {
            self.questions.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Interviewer for ScriptedInterviewer {
        async fn ask(&self, question: &str) -> String {
            self.questions.lock().unwrap().push(question.to_string());
            self.answers.lock().unwrap().pop_front().unwrap_or_default()
        }
    }

    fn clarifier(model: Arc<ScriptedModel>) -> (FeatureClarifier, Arc<InMemoryContextSearch>) {
        let search = Arc::new(InMemoryContextSearch::new());
        (FeatureClarifier::new(search.clone(), model), search)
    }

    #[tokio::test]
    async fn one_answer_then_none() {
        let model = ScriptedModel::new(&["Which role?", "None"]);
        let (clarifier, search) = clarifier(model.clone());
        let interviewer = ScriptedInterviewer::new(&["Admin"]);

        let result = clarifier.clarify("Add login", &interviewer).await;

        assert_eq!(result, "Add login\nClarification: Admin");
        assert_eq!(interviewer.questions(), vec!["Which role?"]);
        assert_eq!(model.calls(), 2);
        assert_eq!(search.call_count(), 2);
    }

    #[tokio::test]
    async fn none_first_returns_input_after_one_round_trip() {
        let model = ScriptedModel::new(&["None"]);
        let (clarifier, search) = clarifier(model.clone());
        let interviewer = ScriptedInterviewer::new(&["unused"]);

        let result = clarifier.clarify("Add login", &interviewer).await;

        assert_eq!(result, "Add login");
        assert_eq!(model.calls(), 1);
        assert_eq!(search.call_count(), 1);
        assert!(interviewer.questions().is_empty());
    }

    #[tokio::test]
    async fn none_anywhere_in_reply_ends_loop() {
        let model = ScriptedModel::new(&["Is none of the options acceptable?"]);
        let (clarifier, _) = clarifier(model.clone());
        let interviewer = ScriptedInterviewer::new(&["yes"]);

        assert_eq!(clarifier.clarify("Add login", &interviewer).await, "Add login");
        assert!(interviewer.questions().is_empty());
    }

    #[tokio::test]
    async fn blank_reply_ends_loop() {
        let model = ScriptedModel::new(&["   "]);
        let (clarifier, _) = clarifier(model);
        let interviewer = ScriptedInterviewer::new(&["yes"]);

        assert_eq!(clarifier.clarify("Add login", &interviewer).await, "Add login");
    }

    #[tokio::test]
    async fn empty_answer_ends_loop() {
        let model = ScriptedModel::new(&["Which role?", "Which page?"]);
        let (clarifier, _) = clarifier(model.clone());
        let interviewer = ScriptedInterviewer::new(&["Admin", "  "]);

        let result = clarifier.clarify("Add login", &interviewer).await;

        assert_eq!(result, "Add login\nClarification: Admin");
        assert_eq!(model.calls(), 2);
    }

    #[tokio::test]
    async fn stops_after_five_rounds() {
        let model = ScriptedModel::new(&["Which role?"]);
        let (clarifier, search) = clarifier(model.clone());
        let answers: Vec<String> = (1..=10).map(|i| format!("a{}", i)).collect();
        let interviewer = ScriptedInterviewer::new(&answers);

        let result = clarifier.clarify("Add login", &interviewer).await;

        assert_eq!(model.calls(), MAX_ROUNDS);
        assert_eq!(search.call_count(), MAX_ROUNDS);
        assert_eq!(interviewer.questions().len(), MAX_ROUNDS);
        assert!(result.ends_with("\nClarification: a5"));
        assert!(!result.contains("a6"));
    }

    proptest! {
        #[test]
        fn clarified_text_accumulates_answers_in_order(
            initial in "[a-zA-Z ]{1,30}",
            answers in proptest::collection::vec("[a-zA-Z0-9]{1,12}", 0..8),
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let model = ScriptedModel::new(&["Which detail?"]);
            let (clarifier, _) = clarifier(model.clone());
            let interviewer = ScriptedInterviewer::new(&answers);

            let result = runtime.block_on(clarifier.clarify(&initial, &interviewer));

            let accepted = answers.len().min(MAX_ROUNDS);
            let mut expected = initial.clone();
            for answer in &answers[..accepted] {
                expected.push_str("\nClarification: ");
                expected.push_str(answer);
            }
            prop_assert_eq!(result, expected);
            prop_assert!(model.calls() <= MAX_ROUNDS);
        }
    }
}
