//! GitHub API plumbing via octocrab.
//!
//! A repository-scoped client plus the three calls this action makes:
//! deployment creation, label listing, and open-pull-request listing.
//! Failures are never retried here; see `error` for why.

mod client;
mod deployments;
mod error;
mod listing;

pub use client::GitHubClient;
pub use deployments::{create_deployment, Deployment};
pub use error::GitHubApiError;
pub use listing::{list_open_pull_requests, list_repo_labels, OpenPullRequest};
