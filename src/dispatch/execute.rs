//! Concurrent execution of a deployment plan.

use futures::future::join_all;

use crate::github::{create_deployment, Deployment, GitHubApiError, GitHubClient};

use super::plan::DeploymentRequest;

/// Fans the plan out as concurrent deployment-creation calls.
///
/// All requests run to completion regardless of sibling failures: one
/// request erroring must not cancel deployments already in flight, and
/// nothing created is ever rolled back. The first error (in plan order) is
/// surfaced after every call has finished; later errors are logged so none
/// is silently dropped.
///
/// On success the returned records preserve plan order, so the production
/// deployment of a push plan stays first.
pub async fn execute(
    client: &GitHubClient,
    plan: &[DeploymentRequest],
) -> Result<Vec<Deployment>, GitHubApiError> {
    let results = join_all(plan.iter().map(|request| {
        create_deployment(client, &request.environment, &request.git_ref)
    }))
    .await;

    let mut deployments = Vec::with_capacity(results.len());
    let mut first_error = None;

    for (request, result) in plan.iter().zip(results) {
        match result {
            Ok(deployment) => deployments.push(deployment),
            Err(err) => {
                tracing::error!(
                    environment = %request.environment,
                    git_ref = %request.git_ref,
                    error = %err,
                    "deployment creation failed"
                );
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(deployments),
    }
}
