//! GitHub API operations module
//!
//! Provides the GitHub API operations the finder uses, built on octocrab.

pub mod client;
pub mod error;
pub mod util;

pub use client::{GitHubClient, GitHubClientBuilder};
pub use error::{GitHubError, GitHubResult};
pub use search_repositories::SEARCH_RESULT_CEILING;
pub use util::spawn_task;

// GitHub API operations - Search (internal)
pub(crate) mod search_repositories;

// GitHub API operations - Repositories (internal)
pub(crate) mod get_file_contents;
pub(crate) mod get_license;
pub(crate) mod get_repository;
pub(crate) mod list_commits;
pub(crate) mod list_contributors;
