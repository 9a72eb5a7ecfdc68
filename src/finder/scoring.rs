//! Java version confidence scoring
//!
//! A heuristic: description keywords are worth 3 points each, topic
//! variants 5 points each. Scores are not normalised.

/// Points for each version keyword found in the description.
pub const KEYWORD_POINTS: u32 = 3;

/// Points for each version topic present on the repository.
pub const TOPIC_POINTS: u32 = 5;

/// Keywords searched for in the lower-cased description.
#[must_use]
pub fn version_keywords(version: &str) -> Vec<String> {
    let mut keywords = vec![
        format!("java {version}"),
        format!("java{version}"),
        format!("jdk{version}"),
    ];
    if version == "8" {
        keywords.extend(["1.8", "lambda", "stream"].map(str::to_string));
    }
    keywords
}

/// Topic names that mark a repository as targeting `version`.
#[must_use]
pub fn version_topics(version: &str) -> Vec<String> {
    vec![
        format!("java{version}"),
        format!("java-{version}"),
        format!("jdk{version}"),
    ]
}

/// Computes the version confidence score of one repository.
///
/// Keywords match as substrings of the lower-cased description; topics must
/// match exactly, ignoring case.
#[must_use]
pub fn version_score(description: Option<&str>, topics: &[String], version: &str) -> u32 {
    let description = description.unwrap_or_default().to_lowercase();
    let keyword_hits = version_keywords(version)
        .iter()
        .filter(|keyword| description.contains(keyword.as_str()))
        .count() as u32;

    let topics: Vec<String> = topics.iter().map(|t| t.to_lowercase()).collect();
    let topic_hits = version_topics(version)
        .iter()
        .filter(|variant| topics.contains(variant))
        .count() as u32;

    keyword_hits * KEYWORD_POINTS + topic_hits * TOPIC_POINTS
}
