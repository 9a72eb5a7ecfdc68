//! Configuration for finder operations

use crate::finder::types::{FinderError, FinderResult};
use crate::github::{GitHubClient, GitHubError};

/// Environment variable holding the GitHub personal access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the GitHub API base URI.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Configuration for finder operations
#[derive(Debug, Clone)]
pub struct FinderConfig {
    pub token: Option<String>,
    pub api_base_uri: Option<String>,
    /// Results requested per search page (GitHub maximum is 100).
    pub api_page_size: u8,
    pub default_max_results: usize,
    /// Result cap applied by the web endpoints when the body has none.
    pub web_max_results: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base_uri: None,
            api_page_size: 100,
            default_max_results: 100,
            web_max_results: 20,
        }
    }
}

impl FinderConfig {
    /// Reads the token and API base URI from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Everything else keeps its default.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            log::warn!("Ignoring unreadable .env file: {e}");
        }

        let read = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        let config = Self {
            token: read(TOKEN_ENV),
            api_base_uri: read(API_URL_ENV),
            ..Self::default()
        };
        if config.token.is_none() {
            log::warn!("{TOKEN_ENV} is not set; using unauthenticated GitHub access");
        }
        config
    }

    /// Rejects values GitHub would refuse.
    pub fn validate(&self) -> FinderResult<()> {
        if !(1..=100).contains(&self.api_page_size) {
            return Err(FinderError::Config(format!(
                "api_page_size must be between 1 and 100, got {}",
                self.api_page_size
            )));
        }
        if self.default_max_results == 0 || self.web_max_results == 0 {
            return Err(FinderError::Config(
                "result caps must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds a GitHub client from this configuration.
    pub fn build_client(&self) -> Result<GitHubClient, GitHubError> {
        let mut builder = GitHubClient::builder();
        if let Some(token) = &self.token {
            builder = builder.personal_token(token.clone());
        }
        if let Some(uri) = &self.api_base_uri {
            builder = builder.base_uri(uri.clone());
        }
        builder.build()
    }
}
