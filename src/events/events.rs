//! Typed representations of the workflow events this action handles.
//!
//! Each variant carries only the fields dispatch needs. The action reacts to
//! two event families:
//!
//! - `push` - main-branch pushes trigger a production deployment plus staging
//!   reconciliation; pushes to other branches are a deliberate no-op
//! - `pull_request` / `pull_request_target` - the PR's own staging labels
//!   select the staging namespaces to deploy at its head commit

use crate::types::{RepoId, Sha};

/// A parsed triggering event.
///
/// Unknown event names are a fatal [`super::parser::EventParseError::UnsupportedEvent`],
/// not a silent default: an action wired to an event it cannot handle is a
/// workflow misconfiguration worth surfacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A branch was pushed.
    Push(PushEvent),

    /// A pull request was opened, labeled, or synchronized.
    ///
    /// Covers both `pull_request` and `pull_request_target` (the variant
    /// GitHub delivers for fork-originated pull requests).
    PullRequest(PullRequestEvent),
}

impl TriggerEvent {
    /// The repository this event belongs to.
    pub fn repo(&self) -> &RepoId {
        match self {
            TriggerEvent::Push(e) => &e.repo,
            TriggerEvent::PullRequest(e) => &e.repo,
        }
    }
}

/// A push event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushEvent {
    /// The repository.
    pub repo: RepoId,

    /// The full ref that was pushed (`refs/heads/...`).
    pub git_ref: String,

    /// The commit the ref points at after the push.
    pub after: Sha,
}

/// A pull request event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    /// The repository.
    pub repo: RepoId,

    /// The current head SHA of the PR branch.
    pub head_sha: Sha,

    /// Names of the labels attached to the pull request, in label order.
    ///
    /// Carried unfiltered; the planner selects the staging-prefixed ones.
    pub labels: Vec<String>,
}
