//! Paginated listing of repository labels and open pull requests.
//!
//! Both listings page through results 100 at a time until a short page.
//! Pagination failures propagate; a truncated listing would make the
//! reconciliation in `resolve` silently wrong.

use super::client::GitHubClient;
use super::error::GitHubApiError;

const PER_PAGE: u8 = 100;

/// An open pull request, reduced to the fields reconciliation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPullRequest {
    pub number: u64,
    /// Names of the labels attached to the pull request.
    pub labels: Vec<String>,
}

/// Lists the names of all labels defined on the repository.
pub async fn list_repo_labels(client: &GitHubClient) -> Result<Vec<String>, GitHubApiError> {
    let mut page = 1u32;
    let mut names = Vec::new();

    loop {
        let result = client
            .inner()
            .issues(client.owner(), client.repo_name())
            .list_labels_for_repo()
            .per_page(PER_PAGE)
            .page(page)
            .send()
            .await?;

        let items = result.items;
        let is_last_page = items.len() < PER_PAGE as usize;

        names.extend(items.into_iter().map(|label| label.name));

        if is_last_page {
            break;
        }
        page += 1;
    }

    tracing::debug!(repo = %client.repo(), count = names.len(), "listed repository labels");
    Ok(names)
}

/// Lists all open pull requests with their label names.
pub async fn list_open_pull_requests(
    client: &GitHubClient,
) -> Result<Vec<OpenPullRequest>, GitHubApiError> {
    let mut page = 1u32;
    let mut all_prs = Vec::new();

    loop {
        let result = client
            .inner()
            .pulls(client.owner(), client.repo_name())
            .list()
            .state(octocrab::params::State::Open)
            .per_page(PER_PAGE)
            .page(page)
            .send()
            .await?;

        let items = result.items;
        let is_last_page = items.len() < PER_PAGE as usize;

        for pull in items {
            all_prs.push(OpenPullRequest {
                number: pull.number,
                labels: pull
                    .labels
                    .unwrap_or_default()
                    .into_iter()
                    .map(|label| label.name)
                    .collect(),
            });
        }

        if is_last_page {
            break;
        }
        page += 1;
    }

    tracing::debug!(repo = %client.repo(), count = all_prs.len(), "listed open pull requests");
    Ok(all_prs)
}
