//! Action outputs via the `GITHUB_OUTPUT` file protocol.
//!
//! Two outputs: `deployments`, the JSON array of every created deployment
//! record, and `deployment`, the first record alone (or JSON `null` when a
//! run legitimately created nothing, e.g. a push to a non-main branch).
//! Compact JSON encoding keeps each value on a single line, which is what
//! the `name=value` output format requires.

use std::io;
use std::path::Path;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::github::Deployment;

/// Appends the `deployments` and `deployment` outputs to the output file.
pub async fn write_outputs(path: &Path, deployments: &[Deployment]) -> io::Result<()> {
    let all = serde_json::to_string(deployments)?;
    let first = match deployments.first() {
        Some(deployment) => serde_json::to_string(deployment)?,
        None => "null".to_string(),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(format!("deployments={all}\ndeployment={first}\n").as_bytes())
        .await?;
    file.flush().await?;

    Ok(())
}
