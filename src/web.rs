//! JSON web front-end for the finder.
//!
//! ## Endpoints
//!
//! - `GET /`: minimal search form
//! - `GET /health`: liveness check
//! - `POST /search`: generic search
//! - `POST /search-java-version`: Java version search
//! - `POST /analyze`: single-repository analysis
//!
//! Successful responses use a `{"success": true, ...}` envelope, failures
//! `{"success": false, "error": "..."}`.

use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::finder::{
    Aggregator, BuildTool, FinderError, RepositoryProvider, SearchCriteria, SearchOutput,
    analyze_repository,
};

type SharedFinder<P> = Arc<Aggregator<P>>;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /search`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchBody {
    pub query: Option<String>,
    pub language: Option<String>,
    #[serde(deserialize_with = "lenient::topics")]
    pub topics: Vec<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub stars: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub forks: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub max_results: Option<usize>,
}

/// Body of `POST /search-java-version`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VersionSearchBody {
    #[serde(deserialize_with = "lenient::text")]
    pub java_version: Option<String>,
    pub build_tool: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub stars: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub max_results: Option<usize>,
}

/// Body of `POST /analyze`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeBody {
    pub repo_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error returned by handlers, rendered as the failure envelope.
#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Internal(String),
}

impl From<FinderError> for WebError {
    fn from(e: FinderError) -> Self {
        match e {
            FinderError::InvalidInput(_) => Self::BadRequest(e.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            Self::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        warn!("Request failed ({status}): {message}");
        (status, Json(json!({ "success": false, "error": message }))).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Builds the router around a shared aggregator.
pub fn router<P: RepositoryProvider>(finder: Aggregator<P>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/search", post(search::<P>))
        .route("/search-java-version", post(search_java_version::<P>))
        .route("/analyze", post(analyze::<P>))
        .with_state(Arc::new(finder))
}

/// Binds `bind` and serves until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve<P: RepositoryProvider>(finder: Aggregator<P>, bind: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!("Web front-end listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(finder)).await
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "service": "repo-finder" }))
}

async fn search<P: RepositoryProvider>(
    State(finder): State<SharedFinder<P>>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, WebError> {
    let Json(body) = body?;
    let criteria = SearchCriteria {
        free_text: body.query.unwrap_or_default(),
        language: body.language.filter(|l| !l.trim().is_empty()),
        topics: body.topics,
        min_stars: body.stars,
        min_forks: body.forks,
        max_results: body
            .max_results
            .unwrap_or(finder.config().web_max_results),
        version_hint: None,
        build_tool: None,
    };

    let output = finder.search(&criteria).await?;
    Ok(Json(results_envelope(output)))
}

async fn search_java_version<P: RepositoryProvider>(
    State(finder): State<SharedFinder<P>>,
    body: Result<Json<VersionSearchBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, WebError> {
    let Json(body) = body?;
    let build_tool = match body.build_tool.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(tool) => Some(tool.parse::<BuildTool>()?),
    };
    let criteria = SearchCriteria {
        language: Some("Java".to_string()),
        min_stars: body.stars,
        max_results: body
            .max_results
            .unwrap_or(finder.config().web_max_results),
        version_hint: Some(body.java_version.unwrap_or_else(|| "8".to_string())),
        build_tool,
        ..Default::default()
    };

    let output = finder.search(&criteria).await?;
    Ok(Json(results_envelope(output)))
}

async fn analyze<P: RepositoryProvider>(
    State(finder): State<SharedFinder<P>>,
    body: Result<Json<AnalyzeBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, WebError> {
    let Json(body) = body?;
    let Some(repo_url) = body.repo_url.filter(|u| !u.trim().is_empty()) else {
        return Err(WebError::BadRequest("Repository URL is required".to_string()));
    };

    let analysis = analyze_repository(finder.provider(), &repo_url).await?;
    Ok(Json(json!({ "success": true, "analysis": analysis })))
}

fn results_envelope(output: SearchOutput) -> serde_json::Value {
    let mut envelope = json!({
        "success": true,
        "results": output.results,
        "count": output.count,
    });
    if !output.errors.is_empty() {
        envelope["errors"] = json!(output.errors);
    }
    envelope
}

// ---------------------------------------------------------------------------
// Lenient field parsing
// ---------------------------------------------------------------------------

/// Form fields arrive as numbers, numeric strings or empty strings.
mod lenient {
    use serde::de::{Deserialize, Deserializer, Error};
    use serde_json::Value;

    /// A non-negative count; null, empty string and absent all mean `None`.
    pub fn count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<u64>,
    {
        let raw = match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Number(n)) => n
                .as_u64()
                .ok_or_else(|| D::Error::custom(format!("expected a non-negative integer, got {n}")))?,
            Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
            Some(Value::String(s)) => s
                .trim()
                .parse::<u64>()
                .map_err(|e| D::Error::custom(format!("invalid number '{s}': {e}")))?,
            Some(other) => return Err(D::Error::custom(format!("expected a number, got {other}"))),
        };
        T::try_from(raw)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("number {raw} out of range")))
    }

    /// Free text that may also be sent as a bare number (`"java_version": 8`).
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(D::Error::custom(format!("expected text, got {other}"))),
        }
    }

    /// A topic list, or a comma-separated string of topics.
    pub fn topics<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let split = |s: &str| -> Vec<String> {
            s.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        };
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::String(s)) => Ok(split(&s)),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.trim().to_string()),
                    other => Err(D::Error::custom(format!("expected topic text, got {other}"))),
                })
                .filter(|t| !matches!(t, Ok(s) if s.is_empty()))
                .collect(),
            Some(other) => Err(D::Error::custom(format!("expected topics, got {other}"))),
        }
    }
}

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Repository Finder</title></head>
<body>
<h1>Repository Finder</h1>
<form id="search">
  <input name="query" placeholder="query">
  <input name="language" placeholder="language">
  <input name="topics" placeholder="topics, comma separated">
  <input name="stars" placeholder="min stars">
  <input name="forks" placeholder="min forks">
  <input name="max_results" placeholder="max results" value="20">
  <button type="submit">Search</button>
</form>
<pre id="out"></pre>
<script>
document.getElementById('search').addEventListener('submit', async (e) => {
  e.preventDefault();
  const body = Object.fromEntries(new FormData(e.target));
  const res = await fetch('/search', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify(body),
  });
  document.getElementById('out').textContent = JSON.stringify(await res.json(), null, 2);
});
</script>
</body>
</html>
"#;
