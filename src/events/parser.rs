//! Workflow event payload parser.
//!
//! Parses the raw event JSON the runner hands us (via `GITHUB_EVENT_PATH`)
//! into a typed [`TriggerEvent`], keyed on the event name from
//! `GITHUB_EVENT_NAME`.
//!
//! # Parsing strategy
//!
//! 1. The event name selects the payload shape
//! 2. The payload deserializes into permissive raw structs (`Option` fields)
//! 3. Required fields are validated explicitly, with the missing path named
//! 4. Unknown event names are a fatal error naming the event

use serde::Deserialize;
use thiserror::Error;

use crate::types::{RepoId, Sha};

use super::events::{PullRequestEvent, PushEvent, TriggerEvent};

/// Error type for event parsing failures.
#[derive(Debug, Error)]
pub enum EventParseError {
    /// The triggering event is not one this action knows how to dispatch.
    #[error("unsupported event: '{0}'")]
    UnsupportedEvent(String),

    /// JSON deserialization failed.
    #[error("malformed event payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A field the dispatcher needs is absent from the payload.
    #[error("event payload missing required field: {0}")]
    MissingField(&'static str),
}

/// Parses an event payload into a typed [`TriggerEvent`].
///
/// # Arguments
///
/// * `event_name` - the value of `GITHUB_EVENT_NAME`
/// * `payload` - the raw JSON payload bytes
pub fn parse_event(event_name: &str, payload: &[u8]) -> Result<TriggerEvent, EventParseError> {
    match event_name {
        "push" => parse_push(payload).map(TriggerEvent::Push),
        // `pull_request_target` is the shape GitHub uses for fork PRs; the
        // payload fields we read are identical.
        "pull_request" | "pull_request_target" => {
            parse_pull_request(payload).map(TriggerEvent::PullRequest)
        }
        other => Err(EventParseError::UnsupportedEvent(other.to_string())),
    }
}

// ============================================================================
// Raw payload structures for deserialization
//
// These match GitHub's webhook JSON structure. Fields are Option<T> so a
// missing field becomes a named MissingField error instead of an opaque
// serde message.
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawRepository {
    name: Option<String>,
    owner: Option<RawOwner>,
}

#[derive(Debug, Deserialize)]
struct RawOwner {
    login: Option<String>,
    // Push payloads use `name` for the owner; `login` is present on both.
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPushPayload {
    #[serde(rename = "ref")]
    git_ref: Option<String>,
    after: Option<String>,
    repository: Option<RawRepository>,
}

#[derive(Debug, Deserialize)]
struct RawPullRequestPayload {
    pull_request: Option<RawPullRequest>,
    repository: Option<RawRepository>,
}

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    head: Option<RawHead>,
    #[serde(default)]
    labels: Vec<RawLabel>,
}

#[derive(Debug, Deserialize)]
struct RawHead {
    sha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLabel {
    name: String,
}

fn repo_id(raw: Option<RawRepository>) -> Result<RepoId, EventParseError> {
    let repo = raw.ok_or(EventParseError::MissingField("repository"))?;
    let name = repo
        .name
        .ok_or(EventParseError::MissingField("repository.name"))?;
    let owner = repo
        .owner
        .ok_or(EventParseError::MissingField("repository.owner"))?;
    let login = owner
        .login
        .or(owner.name)
        .ok_or(EventParseError::MissingField("repository.owner.login"))?;
    Ok(RepoId::new(login, name))
}

fn parse_push(payload: &[u8]) -> Result<PushEvent, EventParseError> {
    let raw: RawPushPayload = serde_json::from_slice(payload)?;

    Ok(PushEvent {
        repo: repo_id(raw.repository)?,
        git_ref: raw.git_ref.ok_or(EventParseError::MissingField("ref"))?,
        after: Sha::new(raw.after.ok_or(EventParseError::MissingField("after"))?),
    })
}

fn parse_pull_request(payload: &[u8]) -> Result<PullRequestEvent, EventParseError> {
    let raw: RawPullRequestPayload = serde_json::from_slice(payload)?;
    let pr = raw
        .pull_request
        .ok_or(EventParseError::MissingField("pull_request"))?;
    let head_sha = pr
        .head
        .and_then(|h| h.sha)
        .ok_or(EventParseError::MissingField("pull_request.head.sha"))?;

    Ok(PullRequestEvent {
        repo: repo_id(raw.repository)?,
        head_sha: Sha::new(head_sha),
        labels: pr.labels.into_iter().map(|l| l.name).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_payload() -> Vec<u8> {
        serde_json::json!({
            "ref": "refs/heads/main",
            "before": "0".repeat(40),
            "after": "a".repeat(40),
            "repository": {
                "name": "website",
                "owner": { "login": "octocat" }
            }
        })
        .to_string()
        .into_bytes()
    }

    fn pull_request_payload(labels: &[&str]) -> Vec<u8> {
        serde_json::json!({
            "action": "labeled",
            "pull_request": {
                "number": 42,
                "head": { "sha": "b".repeat(40) },
                "labels": labels
                    .iter()
                    .map(|name| serde_json::json!({ "name": name }))
                    .collect::<Vec<_>>()
            },
            "repository": {
                "name": "website",
                "owner": { "login": "octocat" }
            }
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn parses_push_event() {
        let event = parse_event("push", &push_payload()).unwrap();
        match event {
            TriggerEvent::Push(push) => {
                assert_eq!(push.repo, RepoId::new("octocat", "website"));
                assert_eq!(push.git_ref, "refs/heads/main");
                assert_eq!(push.after, Sha::new("a".repeat(40)));
            }
            other => panic!("expected push event, got {:?}", other),
        }
    }

    #[test]
    fn parses_pull_request_event_with_labels_in_order() {
        let payload = pull_request_payload(&["staging/magenta", "bug", "staging/teal"]);
        let event = parse_event("pull_request", &payload).unwrap();
        match event {
            TriggerEvent::PullRequest(pr) => {
                assert_eq!(pr.head_sha, Sha::new("b".repeat(40)));
                assert_eq!(pr.labels, vec!["staging/magenta", "bug", "staging/teal"]);
            }
            other => panic!("expected pull request event, got {:?}", other),
        }
    }

    #[test]
    fn pull_request_target_parses_the_same_shape() {
        let payload = pull_request_payload(&["staging/teal"]);
        let event = parse_event("pull_request_target", &payload).unwrap();
        assert!(matches!(event, TriggerEvent::PullRequest(_)));
    }

    #[test]
    fn pull_request_without_labels_field_defaults_to_empty() {
        let payload = serde_json::json!({
            "pull_request": { "head": { "sha": "c".repeat(40) } },
            "repository": { "name": "website", "owner": { "login": "octocat" } }
        })
        .to_string()
        .into_bytes();

        let event = parse_event("pull_request", &payload).unwrap();
        match event {
            TriggerEvent::PullRequest(pr) => assert!(pr.labels.is_empty()),
            other => panic!("expected pull request event, got {:?}", other),
        }
    }

    #[test]
    fn push_owner_name_accepted_when_login_absent() {
        // Push payloads carry the owner under `name` rather than `login`.
        let payload = serde_json::json!({
            "ref": "refs/heads/main",
            "after": "a".repeat(40),
            "repository": {
                "name": "website",
                "owner": { "name": "octocat" }
            }
        })
        .to_string()
        .into_bytes();

        let event = parse_event("push", &payload).unwrap();
        assert_eq!(event.repo(), &RepoId::new("octocat", "website"));
    }

    #[test]
    fn unsupported_event_names_the_event() {
        let err = parse_event("workflow_dispatch", b"{}").unwrap_err();
        assert!(matches!(err, EventParseError::UnsupportedEvent(_)));
        assert!(err.to_string().contains("workflow_dispatch"));
    }

    #[test]
    fn missing_after_sha_is_a_named_error() {
        let payload = serde_json::json!({
            "ref": "refs/heads/main",
            "repository": { "name": "website", "owner": { "login": "octocat" } }
        })
        .to_string()
        .into_bytes();

        let err = parse_event("push", &payload).unwrap_err();
        assert!(matches!(err, EventParseError::MissingField("after")));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_event("push", b"not json"),
            Err(EventParseError::Json(_))
        ));
    }
}
