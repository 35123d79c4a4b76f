mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{RawInputs, missing_inputs_message};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::event::load_snapshot;
use crate::infra::github::GitHubClient;

#[derive(Parser)]
#[command(
    name = "pr-jira-link",
    author,
    version,
    about = "Keeps a pull request description in sync with its Jira ticket link"
)]
struct Cli {
    /// Path to the triggering event payload; defaults to GITHUB_EVENT_PATH.
    #[arg(long)]
    event: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run().await {
        error!("{error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let event_path = cli
        .event
        .or_else(|| std::env::var_os("GITHUB_EVENT_PATH").map(PathBuf::from))
        .ok_or_else(|| AppError::Event("no event payload path available".to_string()))?;
    let repository = std::env::var("GITHUB_REPOSITORY")
        .map_err(|_| AppError::Event("GITHUB_REPOSITORY is not set".to_string()))?;

    let Some(snapshot) = load_snapshot(&event_path, &repository)? else {
        info!("event carries no pull request; nothing to do");
        return Ok(());
    };

    let inputs = RawInputs::from_env();
    let missing = inputs.missing();
    if !missing.is_empty() {
        warn!("{}", missing_inputs_message(&missing));
        return Ok(());
    }

    let config = inputs.into_config();
    let pull_requests = Arc::new(GitHubClient::new(config.github_token.clone()));
    let context = AppContext::new(config, pull_requests);

    workflow::sync::run(&context, &snapshot).await?;

    Ok(())
}
