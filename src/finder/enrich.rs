//! Per-record enrichment
//!
//! Every derived field is fetched on its own. A failed lookup degrades only
//! that field to its placeholder; the failure is logged and recorded in
//! `degraded_fields`.

use chrono::{DateTime, Utc};
use log::warn;

use crate::finder::provider::{RepoHit, RepositoryProvider};
use crate::finder::types::{CommitInfo, NO_LICENSE, RepositoryRecord};
use crate::github::GitHubResult;

const DAYS_PER_YEAR: f64 = 365.25;

/// Builds the enriched record for one search hit.
pub(crate) async fn enrich<P: RepositoryProvider>(
    provider: &P,
    hit: RepoHit,
    now: DateTime<Utc>,
) -> RepositoryRecord {
    let mut degraded = Vec::new();
    let repo = hit.full_name.as_str();

    let contributors = resolve(
        "contributors",
        repo,
        provider.contributor_count(&hit).await,
        0,
        &mut degraded,
    );
    let commits = resolve(
        "commits",
        repo,
        provider.commit_count(&hit).await,
        0,
        &mut degraded,
    );
    let license = resolve("license", repo, provider.license(&hit).await, None, &mut degraded)
        .unwrap_or_else(|| NO_LICENSE.to_string());
    let last_commit = resolve(
        "last_commit",
        repo,
        provider.last_commit(&hit).await,
        CommitInfo::unavailable(),
        &mut degraded,
    );

    RepositoryRecord {
        age_years: age_in_years(hit.created_at, now),
        full_name: hit.full_name,
        description: hit.description,
        stars: hit.stars,
        forks: hit.forks,
        language: hit.language,
        topics: hit.topics,
        url: hit.url,
        created_at: hit.created_at,
        contributors,
        commits,
        last_updated: hit.updated_at,
        size_kb: hit.size_kb,
        open_issues: hit.open_issues,
        license,
        last_commit,
        default_branch: hit.default_branch,
        target_version: None,
        version_score: None,
        degraded_fields: degraded,
    }
}

/// Unwraps a field lookup, substituting `fallback` on failure.
fn resolve<T>(
    field: &str,
    repo: &str,
    result: GitHubResult<T>,
    fallback: T,
    degraded: &mut Vec<String>,
) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to fetch {field} for {repo}: {e}");
            degraded.push(field.to_string());
            fallback
        }
    }
}

/// Repository age in years, rounded to one decimal.
///
/// Whole days elapsed are divided by 365.25. A creation date in the future
/// counts as age zero.
#[must_use]
pub fn age_in_years(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days = (now - created_at).num_days().max(0) as f64;
    (days / DAYS_PER_YEAR * 10.0).round() / 10.0
}
