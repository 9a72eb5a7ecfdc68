//! Search provider abstraction
//!
//! The aggregator and the single-repository analysis only talk to GitHub
//! through [`RepositoryProvider`]. [`GitHubClient`] is the production
//! implementation.

use chrono::{DateTime, Utc};
use octocrab::models::{Repository, repos::RepoCommit};
use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::finder::types::{CommitInfo, UNKNOWN};
use crate::github::{GitHubClient, GitHubError, GitHubResult};

/// Longest last-commit message kept, in characters.
pub const COMMIT_MESSAGE_MAX_CHARS: usize = 100;

/// A repository as returned by search, before enrichment.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RepoHit {
    pub full_name: String,
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub size_kb: u32,
    pub open_issues: u32,
    pub license: Option<String>,
    pub default_branch: String,
}

/// One page of search hits.
#[derive(Clone, Debug, Default)]
pub struct HitPage {
    pub items: Vec<RepoHit>,
    pub total_count: Option<u64>,
}

/// Source of repository search results and per-repository details.
pub trait RepositoryProvider: Send + Sync + 'static {
    /// Fetches one page (1-based) of search results for `query`.
    fn search_page(
        &self,
        query: &str,
        page: u32,
        per_page: u8,
    ) -> impl Future<Output = GitHubResult<HitPage>> + Send;

    /// Fetches metadata for `owner/name`.
    fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> impl Future<Output = GitHubResult<RepoHit>> + Send;

    fn contributor_count(&self, hit: &RepoHit) -> impl Future<Output = GitHubResult<u32>> + Send;

    fn commit_count(&self, hit: &RepoHit) -> impl Future<Output = GitHubResult<u32>> + Send;

    /// License name, `Ok(None)` when the repository has no license.
    fn license(&self, hit: &RepoHit) -> impl Future<Output = GitHubResult<Option<String>>> + Send;

    /// Newest commit on the default branch.
    fn last_commit(&self, hit: &RepoHit) -> impl Future<Output = GitHubResult<CommitInfo>> + Send;

    /// Text of the file at `path`, `Ok(None)` when it exists but has no
    /// decodable content (a directory, a submodule).
    fn file_text(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> impl Future<Output = GitHubResult<Option<String>>> + Send;
}

impl RepositoryProvider for GitHubClient {
    async fn search_page(&self, query: &str, page: u32, per_page: u8) -> GitHubResult<HitPage> {
        let results = self.search_repositories(query, page, per_page).await??;
        let items = results
            .items
            .into_iter()
            .filter_map(|repo| {
                let hit = hit_from_repository(repo);
                if hit.is_none() {
                    log::debug!("Skipping search hit without owner/name");
                }
                hit
            })
            .collect();
        Ok(HitPage {
            items,
            total_count: results.total_count,
        })
    }

    async fn get_repository(&self, owner: &str, name: &str) -> GitHubResult<RepoHit> {
        let repo = GitHubClient::get_repository(self, owner, name).await??;
        hit_from_repository(repo)
            .ok_or_else(|| GitHubError::Api(format!("incomplete metadata for {owner}/{name}")))
    }

    async fn contributor_count(&self, hit: &RepoHit) -> GitHubResult<u32> {
        self.count_contributors(&hit.owner, &hit.name).await?
    }

    async fn commit_count(&self, hit: &RepoHit) -> GitHubResult<u32> {
        self.count_commits(&hit.owner, &hit.name).await?
    }

    async fn license(&self, hit: &RepoHit) -> GitHubResult<Option<String>> {
        if let Some(name) = &hit.license {
            return Ok(Some(name.clone()));
        }
        self.get_license(&hit.owner, &hit.name).await?
    }

    async fn last_commit(&self, hit: &RepoHit) -> GitHubResult<CommitInfo> {
        let commit = self
            .latest_commit(&hit.owner, &hit.name, &hit.default_branch)
            .await??;
        Ok(commit_info(&commit))
    }

    async fn file_text(&self, owner: &str, name: &str, path: &str) -> GitHubResult<Option<String>> {
        let items = self.get_file_contents(owner, name, path).await??;
        match items.as_slice() {
            [] => Err(GitHubError::NotFound(format!("{owner}/{name}:{path}"))),
            [file] => Ok(file.decoded_content()),
            _ => Ok(None),
        }
    }
}

/// Converts an octocrab repository into a provider-neutral hit.
///
/// Returns `None` when the owner cannot be determined.
pub(crate) fn hit_from_repository(repo: Repository) -> Option<RepoHit> {
    let full_name = repo.full_name.clone().or_else(|| {
        repo.owner
            .as_ref()
            .map(|o| format!("{}/{}", o.login, repo.name))
    })?;
    let (owner, name) = crate::github::util::split_full_name(&full_name)?;
    let (owner, name) = (owner.to_string(), name.to_string());

    let now = Utc::now();
    Some(RepoHit {
        owner,
        name,
        description: repo.description.filter(|d| !d.trim().is_empty()),
        stars: repo.stargazers_count.unwrap_or(0),
        forks: repo.forks_count.unwrap_or(0),
        language: repo
            .language
            .as_ref()
            .and_then(|v| v.as_str())
            .map(std::string::ToString::to_string),
        topics: repo.topics.unwrap_or_default(),
        url: repo
            .html_url
            .as_ref()
            .map_or_else(|| format!("https://github.com/{full_name}"), |u| u.to_string()),
        created_at: repo.created_at.unwrap_or(now),
        updated_at: repo.updated_at.unwrap_or(now),
        size_kb: repo.size.unwrap_or(0),
        open_issues: repo.open_issues_count.unwrap_or(0),
        license: repo.license.map(|l| l.name),
        default_branch: repo.default_branch.unwrap_or_else(|| "main".to_string()),
        full_name,
    })
}

/// Extracts the displayed commit metadata.
pub(crate) fn commit_info(commit: &RepoCommit) -> CommitInfo {
    let author = commit.commit.author.as_ref();
    CommitInfo {
        date: author
            .and_then(|a| a.date)
            .map_or_else(|| UNKNOWN.to_string(), |d| d.format("%Y-%m-%d %H:%M").to_string()),
        author: author
            .map(|a| a.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        message: first_line(&commit.commit.message, COMMIT_MESSAGE_MAX_CHARS),
    }
}

/// First line of `message`, cut to at most `max_chars` characters.
#[must_use]
pub fn first_line(message: &str, max_chars: usize) -> String {
    message
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(max_chars)
        .collect()
}
