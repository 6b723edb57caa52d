//! Interviewer that asks clarifying questions on a terminal.

use async_trait::async_trait;
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tokio::sync::Mutex;

use crate::ports::Interviewer;

/// Prints each question and reads a one-line answer.
///
/// Generic over its streams so tests can script the conversation. End of
/// input or a write failure counts as an empty answer.
pub struct ConsoleInterviewer<R, W> {
    io: Mutex<(R, W)>,
}

impl ConsoleInterviewer<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsoleInterviewer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Gives the streams back, mostly so tests can inspect the output.
    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner()
    }

    /// Reads a multi-line description from the same input the answers come
    /// from, so nothing buffered for later questions is lost.
    pub async fn read_description(&self) -> std::io::Result<String> {
        let mut guard = self.io.lock().await;
        read_description(&mut guard.0).await
    }

    async fn converse(&self, question: &str) -> std::io::Result<String> {
        let mut guard = self.io.lock().await;
        let (reader, writer) = &mut *guard;

        let prompt = format!(">> LLM identifies an ambiguity:\n{}\nYour answer: ", question);
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        let mut line = String::new();
        reader.read_line(&mut line).await?;
        let answer = line.trim().to_string();

        if answer.is_empty() {
            writer
                .write_all(b"No clarification provided. Using current description as-is.\n")
                .await?;
            writer.flush().await?;
        }
        Ok(answer)
    }
}

#[async_trait]
impl<R, W> Interviewer for ConsoleInterviewer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn ask(&self, question: &str) -> String {
        match self.converse(question).await {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "Console interaction failed");
                String::new()
            }
        }
    }
}

/// Reads lines until a blank line or end of input, returning them trimmed.
pub async fn read_description<R>(reader: &mut R) -> std::io::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut description = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }
        let content = line.trim_end_matches(['\r', '\n']);
        if content.is_empty() {
            break;
        }
        description.push_str(content);
        description.push('\n');
    }
    Ok(description.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prints_question_and_returns_trimmed_answer() {
        let interviewer = ConsoleInterviewer::new(&b"  Admin  \n"[..], Vec::new());

        let answer = interviewer.ask("Which role?").await;
        assert_eq!(answer, "Admin");

        let (_, output) = interviewer.into_inner();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            ">> LLM identifies an ambiguity:\nWhich role?\nYour answer: "
        );
    }

    #[tokio::test]
    async fn end_of_input_is_an_empty_answer() {
        let interviewer = ConsoleInterviewer::new(&b""[..], Vec::new());

        assert_eq!(interviewer.ask("Which role?").await, "");

        let (_, output) = interviewer.into_inner();
        assert!(String::from_utf8(output)
            .unwrap()
            .ends_with("No clarification provided. Using current description as-is.\n"));
    }

    #[tokio::test]
    async fn description_stops_at_blank_line() {
        let mut input = &b"Add login\nwith SSO\n\nignored\n"[..];
        assert_eq!(read_description(&mut input).await.unwrap(), "Add login\nwith SSO");
    }

    #[tokio::test]
    async fn description_reads_to_end_of_input() {
        let mut input = &b"  Add login  "[..];
        assert_eq!(read_description(&mut input).await.unwrap(), "Add login");
    }

    #[tokio::test]
    async fn description_and_answers_share_one_input() {
        let interviewer = ConsoleInterviewer::new(&b"Add login\n\nAdmin\n"[..], Vec::new());

        assert_eq!(interviewer.read_description().await.unwrap(), "Add login");
        assert_eq!(interviewer.ask("Which role?").await, "Admin");
    }
}
