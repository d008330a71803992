//! Staging environment set resolution.
//!
//! A staging namespace "belongs" to whichever open pull request claims it
//! via a `staging/<namespace>` label. A namespace declared as a repository
//! label but claimed by no open pull request should track the main branch
//! instead, so a push to main must redeploy it. This module computes that
//! set:
//!
//! ```text
//! needing_update = configured (repo labels) - reserved (open PR labels)
//! ```
//!
//! Both sides de-duplicate by canonical string, so the result is independent
//! of listing order and of how many pull requests share a label.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::github::{list_open_pull_requests, list_repo_labels, GitHubApiError, GitHubClient};
use crate::types::{DeploymentEnvironment, Environment, EnvironmentError};

/// Errors from resolving staging environment sets.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A staging-prefixed label failed to parse as an environment.
    ///
    /// One malformed label fails the whole computation: skipping it would
    /// quietly change which environments get redeployed on the next push.
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    /// Listing labels or pull requests failed.
    #[error(transparent)]
    Api(#[from] GitHubApiError),
}

/// Parses the staging-prefixed names out of a label listing.
///
/// Non-staging labels are ignored; staging-prefixed ones must parse, and the
/// result de-duplicates by canonical string.
pub fn staging_environments_from_labels<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<BTreeSet<DeploymentEnvironment>, EnvironmentError> {
    names
        .into_iter()
        .filter(|name| name.starts_with(Environment::STAGING_LABEL_PREFIX))
        .map(DeploymentEnvironment::from_label)
        .collect()
}

/// All staging environments declared via repository labels.
pub async fn configured_staging_environments(
    client: &GitHubClient,
) -> Result<BTreeSet<DeploymentEnvironment>, ResolveError> {
    let labels = list_repo_labels(client).await?;
    let configured = staging_environments_from_labels(labels.iter().map(String::as_str))?;
    Ok(configured)
}

/// All staging environments claimed by at least one open pull request.
pub async fn reserved_staging_environments(
    client: &GitHubClient,
) -> Result<BTreeSet<DeploymentEnvironment>, ResolveError> {
    let pulls = list_open_pull_requests(client).await?;
    for pr in &pulls {
        tracing::debug!(pr = pr.number, labels = ?pr.labels, "open pull request labels");
    }
    let reserved = staging_environments_from_labels(
        pulls
            .iter()
            .flat_map(|pr| pr.labels.iter().map(String::as_str)),
    )?;
    Ok(reserved)
}

/// Configured minus reserved: the staging environments a main-branch push
/// must redeploy.
///
/// The two listings are independent reads and run concurrently. Either
/// failure is fatal; a partial answer would under- or over-deploy.
pub async fn environments_needing_update(
    client: &GitHubClient,
) -> Result<BTreeSet<DeploymentEnvironment>, ResolveError> {
    let (configured, reserved) = tokio::try_join!(
        configured_staging_environments(client),
        reserved_staging_environments(client),
    )?;

    tracing::info!(
        configured = configured.len(),
        reserved = reserved.len(),
        "resolved staging environment sets"
    );

    Ok(configured.difference(&reserved).cloned().collect())
}
