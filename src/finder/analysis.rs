//! Single-repository analysis
//!
//! Detects build tooling from marker files and front-end frameworks from
//! `package.json` dependencies.

use log::{debug, info};

use crate::finder::provider::RepositoryProvider;
use crate::finder::types::{BuildTool, FinderError, FinderResult, RepositoryAnalysis};

/// Build tools checked by marker file, in reporting order.
const BUILD_TOOL_MARKERS: [BuildTool; 3] = [BuildTool::Maven, BuildTool::Ant, BuildTool::Gradle];

/// `package.json` dependency names mapped to the framework they indicate.
const FRAMEWORK_DEPENDENCIES: [(&str, &str); 3] = [
    ("@angular/core", "angular"),
    ("react", "react"),
    ("vue", "vue"),
];

/// Extracts `(owner, name)` from a repository URL.
///
/// The last two path segments are used; a trailing slash and a `.git`
/// suffix are ignored. Inputs without a scheme are split on `/` as-is.
pub fn parse_repo_url(url: &str) -> FinderResult<(String, String)> {
    let trimmed = url.trim();
    let segments: Vec<String> = match reqwest::Url::parse(trimmed) {
        Ok(parsed) => parsed
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).map(str::to_string).collect())
            .unwrap_or_default(),
        Err(_) => trimmed
            .split('/')
            .filter(|seg| !seg.is_empty())
            .map(str::to_string)
            .collect(),
    };

    match segments.as_slice() {
        [.., owner, name] => {
            let name = name.strip_suffix(".git").unwrap_or(name.as_str());
            if name.is_empty() {
                return Err(invalid_url(url));
            }
            Ok((owner.clone(), name.to_string()))
        }
        _ => Err(invalid_url(url)),
    }
}

fn invalid_url(url: &str) -> FinderError {
    FinderError::InvalidInput(format!(
        "cannot parse owner/name from repository URL '{url}'"
    ))
}

/// Analyses the repository at `url`.
///
/// Only the metadata lookup can fail the analysis; a marker file that
/// cannot be read counts as absent.
pub async fn analyze_repository<P: RepositoryProvider>(
    provider: &P,
    url: &str,
) -> FinderResult<RepositoryAnalysis> {
    let (owner, name) = parse_repo_url(url)?;
    info!("Analyzing {owner}/{name}");

    let repo = provider.get_repository(&owner, &name).await?;

    let mut build_tools = Vec::new();
    for tool in BUILD_TOOL_MARKERS {
        if fetch_file(provider, &owner, &name, tool.marker_file()).await.is_some() {
            build_tools.push(tool.as_str().to_string());
        }
    }

    let frameworks = match fetch_file(provider, &owner, &name, "package.json").await {
        Some(Some(text)) => detect_frameworks(&text),
        _ => Vec::new(),
    };

    Ok(RepositoryAnalysis {
        name: repo.full_name,
        url: repo.url,
        build_tools,
        frameworks,
        language: repo.language,
        topics: repo.topics,
    })
}

/// `None` when the file is absent or unreadable, `Some(None)` when it exists
/// without decodable text.
async fn fetch_file<P: RepositoryProvider>(
    provider: &P,
    owner: &str,
    name: &str,
    path: &str,
) -> Option<Option<String>> {
    match provider.file_text(owner, name, path).await {
        Ok(text) => Some(text),
        Err(e) => {
            debug!("{path} not available in {owner}/{name}: {e}");
            None
        }
    }
}

/// Frameworks named in the `dependencies` of a `package.json` document.
///
/// Unparseable documents and missing `dependencies` yield nothing.
#[must_use]
pub fn detect_frameworks(package_json: &str) -> Vec<String> {
    let Ok(doc) = serde_json::from_str::<serde_json::Value>(package_json) else {
        debug!("package.json is not valid JSON");
        return Vec::new();
    };
    let Some(dependencies) = doc.get("dependencies").and_then(|d| d.as_object()) else {
        return Vec::new();
    };

    FRAMEWORK_DEPENDENCIES
        .iter()
        .filter(|(dependency, _)| dependencies.contains_key(*dependency))
        .map(|(_, framework)| (*framework).to_string())
        .collect()
}
