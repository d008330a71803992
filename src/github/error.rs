//! GitHub API error type.
//!
//! Every remote failure - deployment creation, label listing, pull-request
//! listing - is fatal for the run. There is no local retry: the labels and
//! open pull requests are the source of truth for which environments to
//! deploy, and acting on a partial listing would silently under- or
//! over-deploy. The run fails loudly instead and the workflow re-runs it.

use std::fmt;

use thiserror::Error;

/// A failure from a GitHub API call.
#[derive(Debug, Error)]
pub struct GitHubApiError {
    /// The HTTP status code, if the API got far enough to return one.
    pub status_code: Option<u16>,

    /// A human-readable description of the failure.
    pub message: String,

    /// The underlying octocrab error.
    #[source]
    pub source: octocrab::Error,
}

impl fmt::Display for GitHubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "GitHub API error (HTTP {}): {}", code, self.message),
            None => write!(f, "GitHub API error: {}", self.message),
        }
    }
}

impl From<octocrab::Error> for GitHubApiError {
    fn from(err: octocrab::Error) -> Self {
        let (status_code, message) = match &err {
            octocrab::Error::GitHub { source, .. } => (
                Some(source.status_code.as_u16()),
                source.message.clone(),
            ),
            other => (None, other.to_string()),
        };
        Self {
            status_code,
            message,
            source: err,
        }
    }
}
