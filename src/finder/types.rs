//! Type definitions for the repository finder

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::github::GitHubError;

/// Placeholder license name when GitHub detects none or the lookup fails.
pub const NO_LICENSE: &str = "No license";

/// Placeholder for unknown commit date and author.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder commit message when the last commit cannot be fetched.
pub const COMMIT_UNAVAILABLE: &str = "Unable to fetch commit info";

/// Errors surfaced by finder operations.
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("GitHub provider unavailable: {0}")]
    Provider(#[from] GitHubError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type FinderResult<T> = Result<T, FinderError>;

/// Ordered query strings produced for one logical search.
pub type QuerySet = Vec<String>;

/// Build tool hint used to narrow version-targeted searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Maven,
    Gradle,
    Ant,
}

impl BuildTool {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maven => "maven",
            Self::Gradle => "gradle",
            Self::Ant => "ant",
        }
    }

    /// Build descriptor whose presence identifies this tool.
    #[must_use]
    pub const fn marker_file(&self) -> &'static str {
        match self {
            Self::Maven => "pom.xml",
            Self::Gradle => "build.gradle",
            Self::Ant => "build.xml",
        }
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildTool {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maven" => Ok(Self::Maven),
            "gradle" => Ok(Self::Gradle),
            "ant" => Ok(Self::Ant),
            other => Err(FinderError::InvalidInput(format!(
                "unknown build tool '{other}', expected maven, gradle or ant"
            ))),
        }
    }
}

/// Filter criteria for one logical search.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchCriteria {
    pub free_text: String,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub min_stars: Option<u32>,
    pub min_forks: Option<u32>,
    pub max_results: usize,
    /// Target Java version; switches to the multi-query version search.
    pub version_hint: Option<String>,
    pub build_tool: Option<BuildTool>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            free_text: String::new(),
            language: None,
            topics: Vec::new(),
            min_stars: None,
            min_forks: None,
            max_results: 100,
            version_hint: None,
            build_tool: None,
        }
    }
}

impl SearchCriteria {
    pub fn validate(&self) -> FinderResult<()> {
        if self.max_results == 0 {
            return Err(FinderError::InvalidInput(
                "max_results must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Metadata about the newest commit on the default branch.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CommitInfo {
    #[serde(rename = "last_commit_date")]
    pub date: String,
    #[serde(rename = "last_commit_author")]
    pub author: String,
    #[serde(rename = "last_commit_message")]
    pub message: String,
}

impl CommitInfo {
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            date: UNKNOWN.to_string(),
            author: UNKNOWN.to_string(),
            message: COMMIT_UNAVAILABLE.to_string(),
        }
    }
}

/// One enriched repository in a result set.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RepositoryRecord {
    #[serde(rename = "name")]
    pub full_name: String,
    pub description: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub age_years: f64,
    pub contributors: u32,
    pub commits: u32,
    pub last_updated: DateTime<Utc>,
    pub size_kb: u32,
    pub open_issues: u32,
    pub license: String,
    #[serde(flatten)]
    pub last_commit: CommitInfo,
    pub default_branch: String,
    #[serde(rename = "java_version", skip_serializing_if = "Option::is_none", default)]
    pub target_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version_score: Option<u32>,
    /// Enrichment fields that fell back to their placeholder value.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub degraded_fields: Vec<String>,
}

impl RepositoryRecord {
    /// Score used for ranking; records outside a version search rank as 0.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.version_score.unwrap_or(0)
    }
}

/// Outcome of a multi-query search.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct SearchOutput {
    pub results: Vec<RepositoryRecord>,
    pub count: usize,
    pub queries: QuerySet,
    /// Query-level failures; a non-empty list means the results are partial.
    pub errors: Vec<String>,
}

impl SearchOutput {
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Build tooling and framework markers detected in one repository.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct RepositoryAnalysis {
    pub name: String,
    pub url: String,
    pub build_tools: Vec<String>,
    pub frameworks: Vec<String>,
    pub language: Option<String>,
    pub topics: Vec<String>,
}
