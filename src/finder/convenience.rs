//! Convenience wrappers that build a fresh client per operation

use super::{
    Aggregator, BuildTool, FinderConfig, FinderResult, ProgressCallback, RepositoryAnalysis,
    SearchCriteria, SearchOutput, analyze_repository,
};

/// Searches GitHub with a single generic query.
///
/// `progress`, when given, receives an event per enriched record.
///
/// # Example
///
/// ```rust,no_run
/// use repo_finder::{FinderConfig, SearchCriteria, find_repositories};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = FinderConfig::from_env();
///     let criteria = SearchCriteria {
///         free_text: "parser".to_string(),
///         language: Some("Rust".to_string()),
///         min_stars: Some(100),
///         max_results: 20,
///         ..Default::default()
///     };
///
///     let output = find_repositories(&config, criteria, None).await?;
///     for repo in output.results {
///         println!("- {}: {} stars, {} contributors", repo.full_name, repo.stars, repo.contributors);
///     }
///     Ok(())
/// }
/// ```
pub async fn find_repositories(
    config: &FinderConfig,
    mut criteria: SearchCriteria,
    progress: Option<ProgressCallback>,
) -> FinderResult<SearchOutput> {
    criteria.version_hint = None;
    aggregator(config, progress)?.search(&criteria).await
}

/// Searches for Java repositories targeting `java_version`, ranked by
/// version confidence.
pub async fn find_version_repositories(
    config: &FinderConfig,
    java_version: &str,
    build_tool: Option<BuildTool>,
    min_stars: Option<u32>,
    max_results: usize,
    progress: Option<ProgressCallback>,
) -> FinderResult<SearchOutput> {
    let criteria = SearchCriteria {
        language: Some("Java".to_string()),
        min_stars,
        max_results,
        version_hint: Some(java_version.to_string()),
        build_tool,
        ..Default::default()
    };
    aggregator(config, progress)?.search(&criteria).await
}

/// Analyses one repository by URL.
pub async fn analyze(config: &FinderConfig, repo_url: &str) -> FinderResult<RepositoryAnalysis> {
    let client = config.build_client()?;
    analyze_repository(&client, repo_url).await
}

fn aggregator(
    config: &FinderConfig,
    progress: Option<ProgressCallback>,
) -> FinderResult<Aggregator<crate::github::GitHubClient>> {
    config.validate()?;
    let finder = Aggregator::new(config.build_client()?, config.clone());
    Ok(match progress {
        Some(callback) => finder.with_progress(callback),
        None => finder,
    })
}
