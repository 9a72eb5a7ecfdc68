//! GitHub API utilities

use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;
use octocrab::{FromResponse, Octocrab, Page};
use std::future::Future;

/// Spawn an async task for a GitHub API operation.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// Split `owner/name` into its two halves.
pub(crate) fn split_full_name(full_name: &str) -> Option<(&str, &str)> {
    let (owner, name) = full_name.split_once('/')?;
    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }
    Some((owner, name))
}

/// Count the items of a list endpoint with a single request.
///
/// `route` must ask for one item per page; the total is the page number of
/// the `last` pagination link. GitHub answers the contributors of an empty
/// repository with 204 No Content and its commits with 409 Conflict, both
/// counted as zero.
pub(crate) async fn count_listing(inner: &Octocrab, route: &str) -> Result<u32, GitHubError> {
    let response = inner._get(route).await?;
    if response.status().as_u16() == 204 {
        return Ok(0);
    }

    let response = match octocrab::map_github_error(response).await {
        Ok(response) => response,
        Err(e) => {
            let e = GitHubError::from(e);
            return if e.status_code() == Some(409) { Ok(0) } else { Err(e) };
        }
    };

    let page = <Page<serde_json::Value> as FromResponse>::from_response(response).await?;
    Ok(page
        .number_of_pages()
        .unwrap_or(page.items.len() as u32))
}
