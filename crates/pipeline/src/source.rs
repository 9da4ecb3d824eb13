//! Seam traits between the assembler and the release source.
//!
//! The assembler only needs two capabilities: listing a repository's
//! releases and fetching small text assets. Keeping them as traits lets
//! tests drive the pipeline with in-memory fakes.

use async_trait::async_trait;

use lota_core::assets::Release;
use lota_github::{GithubReleaseSource, SourceError};

/// Supplies release listings for configured repositories.
#[async_trait]
pub trait ReleaseSource {
    /// All releases of `repo` (`owner/name`), in source order.
    async fn releases(&self, repo: &str) -> Result<Vec<Release>, SourceError>;
}

/// Fetches small text sidecar assets (properties, checksum files).
#[async_trait]
pub trait AssetFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError>;
}

#[async_trait]
impl ReleaseSource for GithubReleaseSource {
    async fn releases(&self, repo: &str) -> Result<Vec<Release>, SourceError> {
        let listing = self.load_releases(repo).await?;
        Ok(listing.into_iter().map(Release::from).collect())
    }
}

#[async_trait]
impl AssetFetcher for GithubReleaseSource {
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        self.client().fetch_text(url).await
    }
}
