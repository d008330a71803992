//! Top-level orchestration for a single action run.

use std::path::Path;

use thiserror::Error;

use crate::dispatch::{execute, plan_explicit, plan_for_event, DispatchError};
use crate::events::{parse_event, EventParseError};
use crate::github::{GitHubApiError, GitHubClient};
use crate::inputs::{repository_owner, ActionInputs, EventContext, InputError, Mode};
use crate::outputs::write_outputs;
use crate::types::{EnvironmentError, RepoId};

/// Any error that fails a run.
///
/// Nothing is swallowed on the way up: validation failures, unsupported
/// events, and remote API errors all funnel here and become the single
/// failure message `main` reports.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Event(#[from] EventParseError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Api(#[from] GitHubApiError),

    #[error("failed to read event payload or write outputs: {0}")]
    Io(#[from] std::io::Error),
}

/// Executes one complete run: inputs to deployments to outputs.
///
/// Succeeds whenever dispatch completes, including runs that created zero
/// deployments (a push to a non-main branch is a deliberate no-op).
pub async fn run() -> Result<(), RunError> {
    let inputs = ActionInputs::from_env();
    let token = inputs.token()?.to_string();

    let (client, plan) = match inputs.mode()? {
        Mode::Explicit(explicit) => {
            tracing::info!(
                app = %explicit.app,
                environment = %explicit.environment,
                git_ref = %explicit.git_ref,
                "explicit invocation"
            );
            let repo = RepoId::new(repository_owner()?, explicit.app.clone());
            let client = GitHubClient::from_token(&token, repo).map_err(GitHubApiError::from)?;
            let plan = plan_explicit(
                &explicit.environment,
                &explicit.namespace,
                &explicit.git_ref,
            )?;
            (client, plan)
        }
        Mode::EventDriven => {
            let context = EventContext::from_env()?;
            let payload = tokio::fs::read(&context.event_path).await?;
            let event = parse_event(&context.event_name, &payload)?;
            tracing::info!(event = %context.event_name, repo = %event.repo(), "event-driven invocation");

            let client = GitHubClient::from_token(&token, event.repo().clone())
                .map_err(GitHubApiError::from)?;
            let plan = plan_for_event(&client, &event).await?;
            (client, plan)
        }
    };

    let deployments = execute(&client, &plan).await?;
    tracing::info!(count = deployments.len(), "created deployments");

    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => write_outputs(Path::new(&path), &deployments).await?,
        _ => tracing::warn!("GITHUB_OUTPUT not set; skipping outputs"),
    }

    Ok(())
}
