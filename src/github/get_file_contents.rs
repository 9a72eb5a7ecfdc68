//! GitHub file contents retrieval operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::repos::Content};
use std::sync::Arc;

/// Retrieve file or directory contents at `path` on the default branch.
pub(crate) fn get_file_contents(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    path: impl Into<String>,
) -> AsyncTask<Result<Vec<Content>, GitHubError>> {
    let (owner, repo, path) = (owner.into(), repo.into(), path.into());
    spawn_task(async move {
        let content_items = inner
            .repos(&owner, &repo)
            .get_content()
            .path(&path)
            .send()
            .await?;
        Ok(content_items.items)
    })
}
