//! context-coach HTTP server.

use anyhow::Context;

use context_coach::adapters::http::{app, AppDependencies};
use context_coach::adapters::jira::MockIssueTracker;
use context_coach::config::AppConfig;
use context_coach::ports::IssueTracker;
use context_coach::setup;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    setup::init_server_tracing(&config.server);
    config.validate().context("invalid configuration")?;

    let model = setup::language_model(&config.ai).context("failed to set up language model")?;
    let tracker = MockIssueTracker::from_config(&config.jira);
    if !tracker.is_configured() {
        tracing::info!("Issue tracker not configured, tickets are stored locally only");
    }

    let deps = AppDependencies::in_memory(model, tracker);
    let router = app(&deps, &config.server);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
