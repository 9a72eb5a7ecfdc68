//! In-memory repository provider for pipeline tests.

use chrono::{TimeZone, Utc};
use repo_finder::{CommitInfo, GitHubError, GitHubResult, HitPage, RepoHit, RepositoryProvider};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Canned search pages and per-field failures keyed by repository.
#[derive(Default)]
pub struct FakeProvider {
    pages: HashMap<String, Vec<Vec<RepoHit>>>,
    failing_queries: HashSet<String>,
    failing_fields: HashSet<(&'static str, String)>,
    repos: HashMap<String, RepoHit>,
    files: HashMap<String, String>,
    licenses: HashMap<String, String>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the result pages of `query`, in page order.
    pub fn with_pages(mut self, query: &str, pages: Vec<Vec<RepoHit>>) -> Self {
        self.pages.insert(query.to_string(), pages);
        self
    }

    pub fn with_failing_query(mut self, query: &str) -> Self {
        self.failing_queries.insert(query.to_string());
        self
    }

    /// Makes the `field` lookup ("contributors", "commits", "license",
    /// "last_commit") fail for `full_name`.
    pub fn with_failing_field(mut self, field: &'static str, full_name: &str) -> Self {
        self.failing_fields.insert((field, full_name.to_string()));
        self
    }

    pub fn with_repo(mut self, hit: RepoHit) -> Self {
        self.repos.insert(hit.full_name.clone(), hit);
        self
    }

    pub fn with_file(mut self, full_name: &str, path: &str, text: &str) -> Self {
        self.files
            .insert(format!("{full_name}:{path}"), text.to_string());
        self
    }

    pub fn with_license(mut self, full_name: &str, license: &str) -> Self {
        self.licenses
            .insert(full_name.to_string(), license.to_string());
        self
    }

    /// `(query, page)` pairs requested so far.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, field: &'static str, hit: &RepoHit) -> GitHubResult<()> {
        if self.failing_fields.contains(&(field, hit.full_name.clone())) {
            return Err(GitHubError::Api(format!("{field} lookup failed")));
        }
        Ok(())
    }
}

impl RepositoryProvider for FakeProvider {
    async fn search_page(&self, query: &str, page: u32, _per_page: u8) -> GitHubResult<HitPage> {
        self.calls.lock().unwrap().push((query.to_string(), page));
        if self.failing_queries.contains(query) {
            return Err(GitHubError::Api("Validation Failed".to_string()));
        }
        let items = self
            .pages
            .get(query)
            .and_then(|pages| pages.get(page as usize - 1))
            .cloned()
            .unwrap_or_default();
        let total = self
            .pages
            .get(query)
            .map(|pages| pages.iter().map(Vec::len).sum::<usize>() as u64);
        Ok(HitPage {
            items,
            total_count: total,
        })
    }

    async fn get_repository(&self, owner: &str, name: &str) -> GitHubResult<RepoHit> {
        self.repos
            .get(&format!("{owner}/{name}"))
            .cloned()
            .ok_or_else(|| GitHubError::NotFound(format!("{owner}/{name}")))
    }

    async fn contributor_count(&self, hit: &RepoHit) -> GitHubResult<u32> {
        self.check("contributors", hit)?;
        Ok(7)
    }

    async fn commit_count(&self, hit: &RepoHit) -> GitHubResult<u32> {
        self.check("commits", hit)?;
        Ok(120)
    }

    async fn license(&self, hit: &RepoHit) -> GitHubResult<Option<String>> {
        self.check("license", hit)?;
        Ok(self.licenses.get(&hit.full_name).cloned())
    }

    async fn last_commit(&self, hit: &RepoHit) -> GitHubResult<CommitInfo> {
        self.check("last_commit", hit)?;
        Ok(CommitInfo {
            date: "2024-05-01 12:00".to_string(),
            author: "octocat".to_string(),
            message: "Initial commit".to_string(),
        })
    }

    async fn file_text(&self, owner: &str, name: &str, path: &str) -> GitHubResult<Option<String>> {
        self.files
            .get(&format!("{owner}/{name}:{path}"))
            .cloned()
            .map(Some)
            .ok_or_else(|| GitHubError::NotFound(path.to_string()))
    }
}

/// A search hit with the given name and star count.
pub fn hit(full_name: &str, stars: u32) -> RepoHit {
    let (owner, name) = full_name.split_once('/').unwrap();
    RepoHit {
        full_name: full_name.to_string(),
        owner: owner.to_string(),
        name: name.to_string(),
        description: None,
        stars,
        forks: 1,
        language: Some("Java".to_string()),
        topics: Vec::new(),
        url: format!("https://github.com/{full_name}"),
        created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        size_kb: 2048,
        open_issues: 3,
        license: None,
        default_branch: "main".to_string(),
    }
}

/// Hits `prefix/r1` .. `prefix/rN`, all with 10 stars.
pub fn hits(prefix: &str, n: usize) -> Vec<RepoHit> {
    (1..=n).map(|i| hit(&format!("{prefix}/r{i}"), 10)).collect()
}

pub fn names(records: &[repo_finder::RepositoryRecord]) -> Vec<&str> {
    records.iter().map(|r| r.full_name.as_str()).collect()
}
