//! GitHub repository contributor counting.

use crate::github::{
    error::GitHubError,
    util::{count_listing, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Count a repository's contributors.
///
/// An empty repository has zero contributors rather than a failed lookup.
pub(crate) fn count_contributors(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<u32, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/contributors?per_page=1");
        count_listing(&inner, &route).await
    })
}
