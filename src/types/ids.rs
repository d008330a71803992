//! Newtype wrappers for repository and commit identifiers.
//!
//! These keep owner/repo pairs and commit SHAs from degenerating into bare
//! strings as they move between the event parser, the planner, and the API
//! layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepoId {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A git commit SHA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sha(pub String);

impl Sha {
    pub fn new(s: impl Into<String>) -> Self {
        Sha(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A short (7-character) version of the SHA for log lines.
    pub fn short(&self) -> &str {
        self.0.get(..7).unwrap_or(&self.0)
    }
}

impl fmt::Display for Sha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Sha {
    fn from(s: String) -> Self {
        Sha(s)
    }
}

impl From<&str> for Sha {
    fn from(s: &str) -> Self {
        Sha(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_id_displays_as_owner_slash_repo() {
        assert_eq!(
            RepoId::new("octocat", "website").to_string(),
            "octocat/website"
        );
    }

    #[test]
    fn sha_short_truncates_to_seven() {
        let sha = Sha::new("0123456789abcdef0123456789abcdef01234567");
        assert_eq!(sha.short(), "0123456");
    }

    #[test]
    fn sha_short_handles_short_input() {
        assert_eq!(Sha::new("abc").short(), "abc");
    }
}
