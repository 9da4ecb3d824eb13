//! Buffered release source combining the API client and the listing buffer.

use crate::buffer::{ReleaseBuffer, DEFAULT_BUFFER_DIR};
use crate::client::GithubClient;
use crate::error::SourceError;
use crate::model::GithubRelease;

/// Release source with optional on-disk buffering of raw listings.
pub struct GithubReleaseSource {
    client: GithubClient,
    buffer: ReleaseBuffer,
    buffering: bool,
}

impl GithubReleaseSource {
    /// Create a source using the public GitHub API and the default
    /// buffer directory.
    pub fn new(buffering: bool) -> Self {
        Self::with_parts(GithubClient::new(), ReleaseBuffer::new(DEFAULT_BUFFER_DIR), buffering)
    }

    pub fn with_parts(client: GithubClient, buffer: ReleaseBuffer, buffering: bool) -> Self {
        Self {
            client,
            buffer,
            buffering,
        }
    }

    /// The underlying listing buffer.
    pub fn buffer(&self) -> &ReleaseBuffer {
        &self.buffer
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &GithubClient {
        &self.client
    }

    /// Load the release listing for `repo`, replaying the buffer when
    /// buffering is enabled and an entry exists. Freshly fetched,
    /// non-empty listings are buffered for the next run.
    pub async fn load_releases(&self, repo: &str) -> Result<Vec<GithubRelease>, SourceError> {
        if self.buffering {
            if let Some(raw) = self.buffer.get(repo).await? {
                tracing::debug!(repo, "Replaying buffered release listing");
                return Ok(serde_json::from_value(raw)?);
            }
        }

        let raw = self.client.fetch_release_listing(repo).await?;
        if self.buffering && raw.as_array().is_some_and(|listing| !listing.is_empty()) {
            self.buffer.put(repo, &raw).await?;
        }
        Ok(serde_json::from_value(raw)?)
    }
}
