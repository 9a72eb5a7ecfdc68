//! Search query construction
//!
//! Turns [`SearchCriteria`] into GitHub search query strings. GitHub rejects
//! queries with more than five OR-joined alternatives, so a version search is
//! spread over several query strings, one per synonym group.

use crate::finder::types::{QuerySet, SearchCriteria};

/// Largest number of OR-joined alternatives GitHub accepts in one query.
pub const MAX_OR_TERMS: usize = 5;

/// Java versions with a known set of search synonyms.
pub const SUPPORTED_VERSIONS: [&str; 4] = ["8", "11", "17", "21"];

/// Builds the query set for `criteria`.
///
/// A `version_hint` selects the version-targeted search, anything else a
/// single generic query.
#[must_use]
pub fn build_query_set(criteria: &SearchCriteria) -> QuerySet {
    match criteria.version_hint.as_deref() {
        Some(version) => build_version_queries(criteria, version),
        None => vec![build_generic_query(criteria)],
    }
}

/// Builds the single query string of a generic search.
///
/// ```
/// use repo_finder::{SearchCriteria, finder::query::build_generic_query};
///
/// let criteria = SearchCriteria {
///     free_text: "parser".into(),
///     language: Some("Rust".into()),
///     min_stars: Some(100),
///     max_results: 20,
///     ..Default::default()
/// };
/// assert_eq!(build_generic_query(&criteria), "parser language:Rust stars:>100");
/// ```
#[must_use]
pub fn build_generic_query(criteria: &SearchCriteria) -> String {
    let mut clauses = Vec::new();
    push_free_text(&mut clauses, &criteria.free_text);

    if let Some(lang) = non_empty(criteria.language.as_deref()) {
        clauses.push(format!("language:{lang}"));
    }
    push_count_filters(&mut clauses, criteria);
    push_topics(&mut clauses, &criteria.topics);

    clauses.join(" ")
}

/// Builds one query per synonym group of `version`.
///
/// The language is always Java. Unsupported versions give an empty set.
#[must_use]
pub fn build_version_queries(criteria: &SearchCriteria, version: &str) -> QuerySet {
    let Some(groups) = version_synonym_groups(version.trim()) else {
        return Vec::new();
    };

    let base = version_base_clause(criteria);
    groups
        .iter()
        .flat_map(|group| render_group(group))
        .map(|group| format!("{base} {group}"))
        .collect()
}

/// Synonym groups searched for a Java version, `None` when unsupported.
#[must_use]
pub fn version_synonym_groups(version: &str) -> Option<Vec<Vec<String>>> {
    let groups = match version {
        "8" => vec![
            vec![
                "java 8".to_string(),
                "java8".to_string(),
                "jdk8".to_string(),
                "\"1.8\"".to_string(),
            ],
            vec!["lambda".to_string(), "stream".to_string()],
            vec!["maven.compiler.source".to_string()],
            vec!["sourceCompatibility".to_string()],
        ],
        "11" | "17" | "21" => vec![
            vec![
                format!("java {version}"),
                format!("java{version}"),
                format!("jdk{version}"),
            ],
            vec![format!("maven.compiler.source {version}")],
            vec![format!("sourceCompatibility {version}")],
        ],
        _ => return None,
    };
    Some(groups)
}

fn version_base_clause(criteria: &SearchCriteria) -> String {
    let mut clauses = Vec::new();
    push_free_text(&mut clauses, &criteria.free_text);
    clauses.push("language:Java".to_string());
    push_count_filters(&mut clauses, criteria);
    if let Some(tool) = criteria.build_tool {
        clauses.push(tool.marker_file().to_string());
    }
    push_topics(&mut clauses, &criteria.topics);
    clauses.join(" ")
}

/// Renders a synonym group, splitting it so no chunk exceeds
/// [`MAX_OR_TERMS`] alternatives. Single terms are left unparenthesised.
#[must_use]
pub fn render_group(terms: &[String]) -> Vec<String> {
    terms
        .chunks(MAX_OR_TERMS)
        .map(|chunk| match chunk {
            [single] => single.clone(),
            many => format!("({})", many.join(" OR ")),
        })
        .collect()
}

fn push_free_text(clauses: &mut Vec<String>, free_text: &str) {
    let text = free_text.trim();
    if !text.is_empty() {
        clauses.push(text.to_string());
    }
}

// Zero thresholds are no filter at all.
fn push_count_filters(clauses: &mut Vec<String>, criteria: &SearchCriteria) {
    if let Some(stars) = criteria.min_stars.filter(|s| *s > 0) {
        clauses.push(format!("stars:>{stars}"));
    }
    if let Some(forks) = criteria.min_forks.filter(|f| *f > 0) {
        clauses.push(format!("forks:>{forks}"));
    }
}

fn push_topics(clauses: &mut Vec<String>, topics: &[String]) {
    for topic in topics.iter().filter_map(|t| non_empty(Some(t))) {
        clauses.push(format!("topic:{topic}"));
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
