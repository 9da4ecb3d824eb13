//! HTTP client for the GitHub releases API and raw asset downloads.

use std::time::Duration;

use crate::error::SourceError;

/// Base URL of the GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Accept header pinning the v3 JSON API.
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// User agent sent with every request; GitHub rejects anonymous agents.
const USER_AGENT: &str = "lota/0.1";

/// HTTP request timeout for a single fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for release listings and small text asset fetches.
pub struct GithubClient {
    client: reqwest::Client,
    api_base: String,
}

impl GithubClient {
    /// Create a client against the public GitHub API.
    pub fn new() -> Self {
        Self::with_api_base(GITHUB_API_BASE.to_string())
    }

    /// Create a client against a custom API base URL (GitHub Enterprise,
    /// test servers).
    pub fn with_api_base(api_base: String) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, api_base }
    }

    /// Fetch the raw release listing JSON for `repo` (`owner/name`).
    ///
    /// Returned as `serde_json::Value` so the exact body can be buffered
    /// for replay.
    pub async fn fetch_release_listing(&self, repo: &str) -> Result<serde_json::Value, SourceError> {
        let response = self
            .client
            .get(format!("{}/repos/{}/releases", self.api_base, repo))
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch a small text asset (properties or checksum file) by URL.
    pub async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        let response = self.client.get(url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.text().await?)
    }

    /// Ensure the response has a success status code, or surface the
    /// status and body as a [`SourceError::Api`].
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, SourceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SourceError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}
