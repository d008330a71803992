//! Deployment creation against the GitHub deployments API.
//!
//! Octocrab has no high-level handler for `POST /repos/{owner}/{repo}/deployments`,
//! so this goes through its generic `post`. The response is deliberately kept
//! as an opaque `serde_json::Value`: this action passes the created
//! deployment record through to its outputs verbatim and never interprets
//! its fields.

use serde::Serialize;

use crate::types::DeploymentEnvironment;

use super::client::GitHubClient;
use super::error::GitHubApiError;

/// An opaque deployment record as returned by the API.
pub type Deployment = serde_json::Value;

#[derive(Debug, Serialize)]
struct CreateDeploymentBody<'a> {
    #[serde(rename = "ref")]
    git_ref: &'a str,
    task: &'static str,
    auto_merge: bool,
    environment: String,
    required_contexts: [&'static str; 0],
}

/// Issues exactly one deployment-creation call.
///
/// No local retry and no cleanup: a created deployment stays created even if
/// a sibling request in the same run fails afterwards.
pub async fn create_deployment(
    client: &GitHubClient,
    environment: &DeploymentEnvironment,
    git_ref: &str,
) -> Result<Deployment, GitHubApiError> {
    let body = CreateDeploymentBody {
        git_ref,
        task: "deploy",
        auto_merge: false,
        environment: environment.to_string(),
        required_contexts: [],
    };

    tracing::info!(
        repo = %client.repo(),
        environment = %environment,
        git_ref,
        "creating deployment"
    );

    let route = format!(
        "/repos/{}/{}/deployments",
        client.owner(),
        client.repo_name()
    );
    let deployment: Deployment = client.inner().post(route, Some(&body)).await?;

    Ok(deployment)
}
