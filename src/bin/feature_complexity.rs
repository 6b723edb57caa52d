//! feature-complexity: clarify a feature request interactively, then assess
//! its implementation complexity against retrieved code context.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use context_coach::adapters::console::ConsoleInterviewer;
use context_coach::application::{ComplexityAnalyzer, FeatureClarifier};
use context_coach::config::AppConfig;
use context_coach::setup;

#[derive(Debug, Parser)]
#[command(name = "feature-complexity", version, about)]
struct Args {
    /// File holding the feature description. Read from stdin when omitted.
    file: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    setup::init_cli_tracing(args.verbose);

    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    let model = setup::language_model(&config.ai).context("failed to set up language model")?;
    let search = setup::context_search(&config.context_search)
        .context("failed to set up context search")?;

    let interviewer = ConsoleInterviewer::stdio();
    let description = match &args.file {
        Some(path) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read feature description from {}", path.display()))?;
            tracing::info!(path = %path.display(), "Read feature description from file");
            text.trim().to_string()
        }
        None => {
            println!("Enter the feature description (end with an empty line):");
            interviewer
                .read_description()
                .await
                .context("failed to read stdin")?
        }
    };
    if description.is_empty() {
        bail!("No feature description provided.");
    }

    println!("\n=== Phase 1: Feature Clarification ===");
    let clarified = FeatureClarifier::new(Arc::clone(&search), Arc::clone(&model))
        .clarify(&description, &interviewer)
        .await;
    println!("\n--- Clarified Feature Description ---");
    println!("{clarified}");

    println!("\n=== Phase 2: Complexity Analysis ===");
    let report = ComplexityAnalyzer::new(search, model).analyze(&clarified).await;

    println!("\n=== Feature Complexity Analysis Report ===");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
