//! GitHub repository commit counting and latest-commit lookup.

use crate::github::{
    error::GitHubError,
    util::{count_listing, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::repos::RepoCommit};
use std::sync::Arc;

/// Count the commits reachable from the default branch.
///
/// An empty repository has zero commits rather than a failed lookup.
pub(crate) fn count_commits(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<u32, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/commits?per_page=1");
        count_listing(&inner, &route).await
    })
}

/// Fetch the newest commit on `branch`.
pub(crate) fn latest_commit(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
) -> AsyncTask<Result<RepoCommit, GitHubError>> {
    let (owner, repo, branch) = (owner.into(), repo.into(), branch.into());
    spawn_task(async move {
        let page = inner
            .repos(&owner, &repo)
            .list_commits()
            .sha(branch.clone())
            .per_page(1)
            .send()
            .await?;

        page.items
            .into_iter()
            .next()
            .ok_or_else(|| GitHubError::NotFound(format!("no commits on {owner}/{repo}@{branch}")))
    })
}
