//! Pure deployment planning.
//!
//! Each entry mode reduces to a function from already-gathered facts to an
//! ordered list of [`DeploymentRequest`]s. Nothing here touches the network,
//! which keeps the dispatch rules directly testable.

use std::collections::BTreeSet;

use crate::types::{DeploymentEnvironment, Environment, EnvironmentError, Sha};

/// A single deployment to request: which environment, at which reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub environment: DeploymentEnvironment,
    /// The target reference: a commit SHA for event-driven runs, possibly a
    /// branch name for explicit ones.
    pub git_ref: String,
}

/// Whether a pushed ref is the main branch.
///
/// Both conventional names qualify; repositories migrate between them.
pub fn is_main_branch(git_ref: &str) -> bool {
    matches!(git_ref, "refs/heads/main" | "refs/heads/master")
}

/// Plans an explicit invocation: exactly one deployment.
pub fn plan_explicit(
    kind: &str,
    namespace: &str,
    git_ref: &str,
) -> Result<Vec<DeploymentRequest>, EnvironmentError> {
    let environment = DeploymentEnvironment::new(kind, namespace)?;
    Ok(vec![DeploymentRequest {
        environment,
        git_ref: git_ref.to_string(),
    }])
}

/// Plans a main-branch push: one production deployment first, then one
/// staging deployment per unreserved configured namespace, all at the
/// pushed commit.
///
/// Callers must not rely on the relative order of the staging entries; they
/// are dispatched concurrently.
pub fn plan_push(
    needing_update: &BTreeSet<DeploymentEnvironment>,
    after: &Sha,
) -> Vec<DeploymentRequest> {
    let mut requests = vec![DeploymentRequest {
        environment: DeploymentEnvironment::production(),
        git_ref: after.to_string(),
    }];
    requests.extend(
        needing_update
            .iter()
            .cloned()
            .map(|environment| DeploymentRequest {
                environment,
                git_ref: after.to_string(),
            }),
    );
    requests
}

/// Plans a pull-request event: one staging deployment per staging-prefixed
/// label on the pull request itself, in label order, at the head commit.
pub fn plan_pull_request(
    labels: &[String],
    head_sha: &Sha,
) -> Result<Vec<DeploymentRequest>, EnvironmentError> {
    labels
        .iter()
        .filter(|name| name.starts_with(Environment::STAGING_LABEL_PREFIX))
        .map(|name| {
            let environment = DeploymentEnvironment::from_label(name)?;
            Ok(DeploymentRequest {
                environment,
                git_ref: head_sha.to_string(),
            })
        })
        .collect()
}
