//! Contract tests for the octocrab-backed provider against a mock GitHub API.

use repo_finder::{GitHubClient, GitHubError, RepositoryProvider};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client(server: &MockServer) -> GitHubClient {
    let _ = rustls::crypto::ring::default_provider().install_default();
    GitHubClient::builder()
        .base_uri(server.uri())
        .build()
        .expect("client should build")
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    }))
}

#[tokio::test]
async fn test_search_page_maps_repositories() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "parser language:Rust"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "id": 1296269,
                "name": "parser",
                "full_name": "octocat/parser",
                "url": "https://api.github.com/repos/octocat/parser",
                "html_url": "https://github.com/octocat/parser",
                "description": "A fast parser",
                "stargazers_count": 1500,
                "forks_count": 42,
                "language": "Rust",
                "topics": ["parsing", "rust"],
                "created_at": "2015-01-26T19:01:12Z",
                "updated_at": "2024-01-26T19:14:43Z",
                "size": 108,
                "open_issues_count": 3,
                "default_branch": "master"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gh = client(&mock_server).await;
    let page = gh.search_page("parser language:Rust", 1, 30).await.unwrap();

    assert_eq!(page.total_count, Some(1));
    let hit = &page.items[0];
    assert_eq!(hit.full_name, "octocat/parser");
    assert_eq!((hit.owner.as_str(), hit.name.as_str()), ("octocat", "parser"));
    assert_eq!(hit.stars, 1500);
    assert_eq!(hit.forks, 42);
    assert_eq!(hit.language.as_deref(), Some("Rust"));
    assert_eq!(hit.topics, ["parsing", "rust"]);
    assert_eq!(hit.url, "https://github.com/octocat/parser");
    assert_eq!(hit.default_branch, "master");
    assert!(hit.license.is_none());
}

#[tokio::test]
async fn test_search_error_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let gh = client(&mock_server).await;
    let result = gh.search_page("stars:>oops", 1, 30).await;

    assert!(matches!(result, Err(GitHubError::Octocrab(_))));
}

#[tokio::test]
async fn test_search_rejects_empty_query_locally() {
    let mock_server = MockServer::start().await;
    let gh = client(&mock_server).await;

    let result = gh.search_page("  ", 1, 30).await;

    assert!(matches!(result, Err(GitHubError::InvalidInput(_))));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_commit_count_reads_last_page_link() {
    let mock_server = MockServer::start().await;
    let last = format!(
        "<{}/repos/octocat/parser/commits?per_page=1&page=57>; rel=\"last\"",
        mock_server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/repos/octocat/parser/commits"))
        .and(query_param("per_page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", last.as_str())
                .set_body_json(json!([])),
        )
        .mount(&mock_server)
        .await;

    let gh = client(&mock_server).await;
    let count = gh.count_commits("octocat", "parser").await.unwrap().unwrap();

    assert_eq!(count, 57);
}

#[tokio::test]
async fn test_contributor_count_reads_last_page_link() {
    let mock_server = MockServer::start().await;
    let last = format!(
        "<{}/repos/octocat/parser/contributors?per_page=1&page=12>; rel=\"last\"",
        mock_server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/repos/octocat/parser/contributors"))
        .and(query_param("per_page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", last.as_str())
                .set_body_json(json!([{ "login": "octocat", "contributions": 40 }])),
        )
        .mount(&mock_server)
        .await;

    let gh = client(&mock_server).await;
    let count = gh
        .count_contributors("octocat", "parser")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(count, 12);
}

#[tokio::test]
async fn test_single_page_counts_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/solo/contributors"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "login": "octocat", "contributions": 3 }])),
        )
        .mount(&mock_server)
        .await;

    let gh = client(&mock_server).await;
    let count = gh.count_contributors("octocat", "solo").await.unwrap().unwrap();

    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_empty_repository_has_no_contributors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/empty/contributors"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gh = client(&mock_server).await;
    let count = gh.count_contributors("octocat", "empty").await.unwrap();

    assert_eq!(count.unwrap(), 0);
}

#[tokio::test]
async fn test_empty_repository_has_no_commits() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/empty/commits"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Git Repository is empty.",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gh = client(&mock_server).await;
    let count = gh.count_commits("octocat", "empty").await.unwrap();

    assert_eq!(count.unwrap(), 0);
}

#[tokio::test]
async fn test_count_failure_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/private/commits"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Resource not accessible by integration",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let gh = client(&mock_server).await;
    let result = gh.count_commits("octocat", "private").await.unwrap();

    assert_eq!(result.unwrap_err().status_code(), Some(403));
}

#[tokio::test]
async fn test_missing_license_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/parser/license"))
        .respond_with(not_found())
        .mount(&mock_server)
        .await;

    let gh = client(&mock_server).await;
    let license = gh.get_license("octocat", "parser").await.unwrap().unwrap();

    assert!(license.is_none());
}

#[tokio::test]
async fn test_license_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/parser/license"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "LICENSE",
            "path": "LICENSE",
            "license": { "key": "mit", "name": "MIT License", "spdx_id": "MIT" }
        })))
        .mount(&mock_server)
        .await;

    let gh = client(&mock_server).await;
    let license = gh.get_license("octocat", "parser").await.unwrap().unwrap();

    assert_eq!(license.as_deref(), Some("MIT License"));
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/parser/contents/pom.xml"))
        .respond_with(not_found())
        .mount(&mock_server)
        .await;

    let gh = client(&mock_server).await;
    let result = gh.file_text("octocat", "parser", "pom.xml").await;

    match result {
        Err(e) => assert!(e.is_not_found(), "unexpected error: {e}"),
        Ok(text) => panic!("expected an error, got {text:?}"),
    }
}
