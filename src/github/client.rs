//! GitHub API client wrapper
//!
//! Provides a clean API for the GitHub operations the finder needs without
//! exposing Octocrab to callers.
//!
//! # Examples
//!
//! ```rust,no_run
//! use repo_finder::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!
//!     let page = gh.search_repositories("parser language:Rust", 1, 30).await??;
//!     println!("{} repositories", page.total_count.unwrap_or(0));
//!
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use crate::runtime::AsyncTask;
use octocrab::{
    Octocrab, Page,
    models::{
        Repository,
        repos::{Content, RepoCommit},
    },
};
use std::sync::Arc;

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Fetch one page of repository search results
    pub fn search_repositories(
        &self,
        query: impl Into<String>,
        page: u32,
        per_page: u8,
    ) -> AsyncTask<Result<Page<Repository>, GitHubError>> {
        crate::github::search_repositories::search_repositories(
            self.inner.clone(),
            query,
            page,
            per_page,
        )
    }

    // ========================================================================
    // Repositories
    // ========================================================================

    /// Get repository metadata
    pub fn get_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Repository, GitHubError>> {
        crate::github::get_repository::get_repository(self.inner.clone(), owner, repo)
    }

    /// Count contributors
    pub fn count_contributors(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<u32, GitHubError>> {
        crate::github::list_contributors::count_contributors(self.inner.clone(), owner, repo)
    }

    /// Count commits on the default branch
    pub fn count_commits(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<u32, GitHubError>> {
        crate::github::list_commits::count_commits(self.inner.clone(), owner, repo)
    }

    /// Get the newest commit on a branch
    pub fn latest_commit(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> AsyncTask<Result<RepoCommit, GitHubError>> {
        crate::github::list_commits::latest_commit(self.inner.clone(), owner, repo, branch)
    }

    /// Get the detected license name, `None` when GitHub found no license
    pub fn get_license(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Option<String>, GitHubError>> {
        crate::github::get_license::get_license(self.inner.clone(), owner, repo)
    }

    /// Get file contents
    pub fn get_file_contents(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> AsyncTask<Result<Vec<Content>, GitHubError>> {
        crate::github::get_file_contents::get_file_contents(self.inner.clone(), owner, repo, path)
    }
}

/// Builder for creating `GitHubClient`
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise or a test server)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    ///
    /// Without a token the client is anonymous and subject to the much lower
    /// unauthenticated rate limit.
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let mut builder = Octocrab::builder();

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
