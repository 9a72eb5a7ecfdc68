//! Repository finder pipeline
//!
//! Query building, multi-query aggregation, per-field enrichment, version
//! scoring and single-repository analysis.

pub mod aggregate;
pub mod analysis;
pub mod config;
mod convenience;
pub mod enrich;
pub mod progress;
pub mod provider;
pub mod query;
pub mod scoring;
pub mod types;

pub use aggregate::{Aggregator, Ranking};
pub use analysis::{analyze_repository, detect_frameworks, parse_repo_url};
pub use config::FinderConfig;
pub use convenience::{analyze, find_repositories, find_version_repositories};
pub use progress::{ProgressCallback, ProgressEvent};
pub use provider::{HitPage, RepoHit, RepositoryProvider};
pub use types::{
    BuildTool, COMMIT_UNAVAILABLE, CommitInfo, FinderError, FinderResult, NO_LICENSE, QuerySet,
    RepositoryAnalysis, RepositoryRecord, SearchCriteria, SearchOutput, UNKNOWN,
};
