//! GitHub repository license lookup.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Get the display name of a repository's detected license.
///
/// A 404 means GitHub detected no license and yields `Ok(None)`.
pub(crate) fn get_license(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Option<String>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let url = format!("/repos/{owner}/{repo}/license");
        let result: Result<serde_json::Value, GitHubError> = inner
            .get(url, None::<&()>)
            .await
            .map_err(GitHubError::from);

        match result {
            Ok(body) => Ok(body
                .get("license")
                .and_then(|l| l.get("name"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    })
}
