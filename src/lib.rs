//! `repo_finder` - GitHub repository search and enrichment via Octocrab
//!
//! Builds GitHub search queries from filter criteria, splits version
//! searches across several queries to stay under GitHub's OR-operator limit,
//! merges and enriches the hits with derived statistics, and ranks them.
//! A CLI and a small JSON web front-end sit on top of the pipeline.

// Module declarations
pub mod cli;
pub mod finder;
pub mod github;
pub mod report;
pub mod runtime;
pub mod web;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder, GitHubError, GitHubResult};

// Re-export finder types and entry points
pub use finder::{
    Aggregator, BuildTool, COMMIT_UNAVAILABLE, CommitInfo, FinderConfig, FinderError,
    FinderResult, HitPage, NO_LICENSE, ProgressCallback, ProgressEvent, QuerySet, Ranking,
    RepoHit, RepositoryAnalysis, RepositoryProvider, RepositoryRecord, SearchCriteria,
    SearchOutput, UNKNOWN, analyze, analyze_repository, find_repositories,
    find_version_repositories,
};
