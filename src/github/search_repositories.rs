//! GitHub repository search operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, Page, models::Repository};
use std::sync::Arc;

/// The search API never returns more than this many results for one query.
pub const SEARCH_RESULT_CEILING: u32 = 1000;

/// Fetch one page of repository search results.
///
/// No sort is requested, so items arrive in GitHub's best-match order.
pub(crate) fn search_repositories(
    inner: Arc<Octocrab>,
    query: impl Into<String>,
    page: u32,
    per_page: u8,
) -> AsyncTask<Result<Page<Repository>, GitHubError>> {
    let query = query.into();
    spawn_task(async move {
        if query.trim().is_empty() {
            return Err(GitHubError::InvalidInput(
                "search query cannot be empty".to_string(),
            ));
        }
        if page == 0 {
            return Err(GitHubError::InvalidInput("page must be >= 1".to_string()));
        }
        if !(1..=100).contains(&per_page) {
            return Err(GitHubError::InvalidInput(format!(
                "per_page must be between 1 and 100, got {per_page}"
            )));
        }

        let results = inner
            .search()
            .repositories(&query)
            .page(page)
            .per_page(per_page)
            .send()
            .await?;
        Ok(results)
    })
}
