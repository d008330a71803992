//! Octocrab client wrapper scoped to a specific repository.
//!
//! All API calls this action makes target a single repository, so the
//! wrapper carries the `RepoId` alongside the `Octocrab` instance rather
//! than threading owner/repo strings through every call site.

use octocrab::Octocrab;

use crate::types::RepoId;

/// A GitHub API client scoped to a specific repository.
#[derive(Clone)]
pub struct GitHubClient {
    /// The underlying octocrab client.
    client: Octocrab,

    /// The repository this client is scoped to.
    repo: RepoId,
}

impl GitHubClient {
    pub fn new(client: Octocrab, repo: RepoId) -> Self {
        Self { client, repo }
    }

    /// Creates a client authenticated with a personal access token.
    pub fn from_token(token: impl Into<String>, repo: RepoId) -> Result<Self, octocrab::Error> {
        let client = Octocrab::builder().personal_token(token.into()).build()?;
        Ok(Self::new(client, repo))
    }

    /// Returns a reference to the underlying octocrab client.
    pub fn inner(&self) -> &Octocrab {
        &self.client
    }

    /// Returns the repository this client is scoped to.
    pub fn repo(&self) -> &RepoId {
        &self.repo
    }

    pub fn owner(&self) -> &str {
        &self.repo.owner
    }

    pub fn repo_name(&self) -> &str {
        &self.repo.repo
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}
