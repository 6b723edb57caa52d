//! Context search backed by a remote vector search service.
//!
//! The service exposes `GET /health` and `POST /query`. Reachability is
//! probed once, before the first query. If the probe fails and a companion
//! command is configured, the command is started and probed again after the
//! startup delay. Queries are attempted either way.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::OnceCell;

use crate::config::ContextSearchConfig;
use crate::ports::ContextSearch;

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query_text: &'a str,
    top_k: usize,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    results: Vec<QueryHit>,
}

#[derive(Debug, Deserialize)]
struct QueryHit {
    content: String,
    path: String,
    score: f64,
}

impl QueryHit {
    fn into_snippet(self) -> String {
        format!("// File: {} (Similarity: {:.2})\n{}", self.path, self.score, self.content)
    }
}

/// HTTP client for the vector search service.
pub struct RemoteContextSearch {
    client: Client,
    probe_client: Client,
    base_url: String,
    companion: Option<Vec<String>>,
    startup_delay: Duration,
    ready: OnceCell<bool>,
}

impl RemoteContextSearch {
    pub fn new(config: &ContextSearchConfig) -> Result<Self, reqwest::Error> {
        let probe_client = Client::builder()
            .connect_timeout(config.health_timeout())
            .timeout(config.health_timeout())
            .build()?;

        Ok(Self {
            client: Client::new(),
            probe_client,
            base_url: config.vector_db_api_url.trim_end_matches('/').to_string(),
            companion: config.companion_argv(),
            startup_delay: config.startup_delay(),
            ready: OnceCell::new(),
        })
    }

    /// Probes the service once; later calls return the cached outcome.
    pub async fn ensure_ready(&self) -> bool {
        *self.ready.get_or_init(|| self.initialize()).await
    }

    async fn initialize(&self) -> bool {
        if self.check_health().await {
            return true;
        }
        tracing::warn!(url = %self.base_url, "Vector search service is not reachable");

        let Some(argv) = &self.companion else {
            return false;
        };
        if let Err(err) = self.start_companion(argv) {
            tracing::error!(error = %err, "Failed to start vector search service");
            return false;
        }

        tracing::info!(delay = ?self.startup_delay, "Waiting for vector search service to start");
        tokio::time::sleep(self.startup_delay).await;

        let healthy = self.check_health().await;
        if healthy {
            tracing::info!("Vector search service started");
        } else {
            tracing::error!("Vector search service did not come up");
        }
        healthy
    }

    async fn check_health(&self) -> bool {
        match self.probe_client.get(format!("{}/health", self.base_url)).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                tracing::info!(url = %self.base_url, "Vector search service is reachable");
                true
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Vector search health check failed");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "Error connecting to vector search service");
                false
            }
        }
    }

    fn start_companion(&self, argv: &[String]) -> std::io::Result<()> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"))?;
        tracing::info!(command = %argv.join(" "), "Starting vector search service");

        let mut child = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdout = child.stdout.take();
        tokio::spawn(async move {
            if let Some(stdout) = stdout {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    tracing::info!(target: "context_coach::search_service", "{}", line);
                }
            }
            if let Err(err) = child.wait().await {
                tracing::error!(error = %err, "Vector search service exited abnormally");
            }
        });
        Ok(())
    }

    async fn query(&self, query: &str, top_k: usize) -> Result<Vec<String>, reqwest::Error> {
        let response: QueryResponse = self
            .client
            .post(format!("{}/query", self.base_url))
            .json(&QueryRequest { query_text: query, top_k })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.results.into_iter().map(QueryHit::into_snippet).collect())
    }
}

#[async_trait]
impl ContextSearch for RemoteContextSearch {
    async fn search(&self, query: &str, top_k: usize) -> Vec<String> {
        self.ensure_ready().await;
        tracing::info!(query, top_k, "Searching for code snippets");

        match self.query(query, top_k).await {
            Ok(snippets) => {
                tracing::info!(count = snippets.len(), "Found code snippets");
                snippets
            }
            Err(err) => {
                tracing::error!(error = %err, "Error searching vector search service");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn search_for(url: String) -> RemoteContextSearch {
        let config = ContextSearchConfig {
            use_real_vector_db: true,
            vector_db_api_url: url,
            health_timeout_secs: 1,
            ..Default::default()
        };
        RemoteContextSearch::new(&config).unwrap()
    }

    #[tokio::test]
    async fn formats_hits_with_path_and_score() {
        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .route(
                "/query",
                post(|Json(body): Json<Value>| async move {
                    assert_eq!(body["query_text"], "user login");
                    assert_eq!(body["top_k"], 5);
                    Json(json!({
                        "results": [
                            {"content": "fn login() {}", "path": "src/auth.rs", "score": 0.876},
                            {"content": "struct User;", "path": "src/user.rs", "score": 0.5}
                        ]
                    }))
                }),
            );
        let search = search_for(serve(app).await);

        let snippets = search.search("user login", 5).await;

        assert_eq!(
            snippets,
            vec![
                "// File: src/auth.rs (Similarity: 0.88)\nfn login() {}".to_string(),
                "// File: src/user.rs (Similarity: 0.50)\nstruct User;".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn empty_results_give_empty_list() {
        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .route("/query", post(|| async { Json(json!({"results": []})) }));
        let search = search_for(serve(app).await);

        assert!(search.search("anything", 3).await.is_empty());
    }

    #[tokio::test]
    async fn server_error_gives_empty_list() {
        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .route("/query", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let search = search_for(serve(app).await);

        assert!(search.search("anything", 3).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_gives_empty_list() {
        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .route("/query", post(|| async { Json(json!({"hits": []})) }));
        let search = search_for(serve(app).await);

        assert!(search.search("anything", 3).await.is_empty());
    }

    #[tokio::test]
    async fn health_is_probed_once() {
        let probes = Arc::new(AtomicUsize::new(0));
        let counter = probes.clone();
        let app = Router::new()
            .route(
                "/health",
                get(move || {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        "ok"
                    }
                }),
            )
            .route("/query", post(|| async { Json(json!({"results": []})) }));
        let search = search_for(serve(app).await);

        search.search("a", 1).await;
        search.search("b", 1).await;

        assert!(search.ensure_ready().await);
        assert_eq!(probes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn health_requires_exactly_200() {
        let app = Router::new()
            .route("/health", get(|| async { StatusCode::NO_CONTENT }))
            .route("/query", post(|| async { Json(json!({"results": []})) }));
        let search = search_for(serve(app).await);

        assert!(!search.ensure_ready().await);
    }

    #[tokio::test]
    async fn unreachable_service_is_not_fatal() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let search = search_for(url);

        assert!(search.search("anything", 3).await.is_empty());
        assert!(!search.ensure_ready().await);
    }
}
