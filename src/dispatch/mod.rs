//! Event dispatch: from a trigger to an ordered deployment plan.
//!
//! Three mutually exclusive entry modes feed this module:
//!
//! - explicit inputs plan exactly one deployment (`plan::plan_explicit`,
//!   driven from `run`)
//! - a push event plans production plus unreserved staging namespaces, but
//!   only for the main branch
//! - a pull-request event plans one staging deployment per staging label on
//!   the pull request

use thiserror::Error;

use crate::events::TriggerEvent;
use crate::github::GitHubClient;
use crate::resolve::{environments_needing_update, ResolveError};
use crate::types::EnvironmentError;

pub mod execute;
pub mod plan;

pub use execute::execute;
pub use plan::{is_main_branch, plan_explicit, DeploymentRequest};

/// Errors from turning an event into a plan.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Plans the deployments for an event-driven run.
///
/// A push to anything other than the main branch is a no-op by design: the
/// plan is empty, the run succeeds, and no listing calls are made.
pub async fn plan_for_event(
    client: &GitHubClient,
    event: &TriggerEvent,
) -> Result<Vec<DeploymentRequest>, DispatchError> {
    match event {
        TriggerEvent::Push(push) => {
            if !is_main_branch(&push.git_ref) {
                tracing::info!(git_ref = %push.git_ref, "push to non-main branch, nothing to deploy");
                return Ok(Vec::new());
            }

            let needing_update = environments_needing_update(client).await?;
            Ok(plan::plan_push(&needing_update, &push.after))
        }
        TriggerEvent::PullRequest(pr) => {
            let requests = plan::plan_pull_request(&pr.labels, &pr.head_sha)?;
            tracing::info!(
                head = pr.head_sha.short(),
                count = requests.len(),
                "planned staging deployments from pull request labels"
            );
            Ok(requests)
        }
    }
}
