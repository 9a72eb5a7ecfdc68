//! Tests for single-repository analysis.

use super::fake::{FakeProvider, hit};
use repo_finder::finder::{detect_frameworks, parse_repo_url};
use repo_finder::{FinderError, analyze_repository};

#[test]
fn test_parse_repo_url() {
    let expected = ("octocat".to_string(), "hello-world".to_string());
    for url in [
        "https://github.com/octocat/hello-world",
        "https://github.com/octocat/hello-world/",
        "https://github.com/octocat/hello-world.git",
        "  https://github.com/octocat/hello-world  ",
        "github.com/octocat/hello-world",
        "octocat/hello-world",
    ] {
        assert_eq!(parse_repo_url(url).unwrap(), expected, "{url}");
    }
}

#[test]
fn test_parse_repo_url_rejects_short_paths() {
    for url in ["", "https://github.com/", "https://github.com/octocat", "repo"] {
        assert!(
            matches!(parse_repo_url(url), Err(FinderError::InvalidInput(_))),
            "{url}"
        );
    }
}

#[test]
fn test_detect_frameworks() {
    let package_json = r#"{
        "name": "app",
        "dependencies": { "react": "^18.2.0", "@angular/core": "17.0.0", "lodash": "4" },
        "devDependencies": { "vue": "3" }
    }"#;
    assert_eq!(detect_frameworks(package_json), ["angular", "react"]);
}

#[test]
fn test_detect_frameworks_tolerates_bad_input() {
    assert!(detect_frameworks("not json").is_empty());
    assert!(detect_frameworks(r#"{"name": "no-deps"}"#).is_empty());
    assert!(detect_frameworks(r#"{"dependencies": []}"#).is_empty());
}

#[tokio::test]
async fn test_analysis_without_marker_files() {
    let mut repo = hit("octocat/empty", 1);
    repo.topics = vec!["demo".to_string()];
    let provider = FakeProvider::new().with_repo(repo);

    let analysis = analyze_repository(&provider, "https://github.com/octocat/empty")
        .await
        .unwrap();

    assert_eq!(analysis.name, "octocat/empty");
    assert_eq!(analysis.url, "https://github.com/octocat/empty");
    assert!(analysis.build_tools.is_empty());
    assert!(analysis.frameworks.is_empty());
    assert_eq!(analysis.language.as_deref(), Some("Java"));
    assert_eq!(analysis.topics, ["demo"]);
}

#[tokio::test]
async fn test_analysis_detects_build_tools_and_frameworks() {
    let provider = FakeProvider::new()
        .with_repo(hit("acme/shop", 1))
        .with_file("acme/shop", "build.gradle", "plugins { id 'java' }")
        .with_file("acme/shop", "pom.xml", "<project/>")
        .with_file(
            "acme/shop",
            "package.json",
            r#"{"dependencies": {"vue": "3.4.0"}}"#,
        );

    let analysis = analyze_repository(&provider, "https://github.com/acme/shop.git")
        .await
        .unwrap();

    assert_eq!(analysis.build_tools, ["maven", "gradle"]);
    assert_eq!(analysis.frameworks, ["vue"]);
}

#[tokio::test]
async fn test_analysis_of_unknown_repository_fails() {
    let provider = FakeProvider::new();

    let result = analyze_repository(&provider, "https://github.com/nobody/nothing").await;

    assert!(matches!(result, Err(FinderError::Provider(_))));
}

#[tokio::test]
async fn test_analysis_rejects_bad_url() {
    let provider = FakeProvider::new();

    let result = analyze_repository(&provider, "not-a-repo").await;

    assert!(matches!(result, Err(FinderError::InvalidInput(_))));
}
