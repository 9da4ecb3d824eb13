//! On-disk buffer of raw release listings.
//!
//! One JSON file per repository under the buffer directory, keyed by the
//! sanitized repository name. Listings are stored exactly as fetched so
//! a buffered run replays the same input without re-fetching.

use std::path::PathBuf;

use tokio::fs;

use crate::error::SourceError;

/// Default directory for buffered listings.
pub const DEFAULT_BUFFER_DIR: &str = "buffer";

/// Key-value store of raw release listings, one file per repository.
pub struct ReleaseBuffer {
    dir: PathBuf,
}

impl ReleaseBuffer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Whether any buffered listing exists.
    pub async fn has_entries(&self) -> Result<bool, SourceError> {
        if !self.dir.is_dir() {
            return Ok(false);
        }
        let mut entries = fs::read_dir(&self.dir).await?;
        Ok(entries.next_entry().await?.is_some())
    }

    /// The buffered listing for `repo`, if one exists.
    pub async fn get(&self, repo: &str) -> Result<Option<serde_json::Value>, SourceError> {
        let path = self.entry_path(repo);
        if !path.is_file() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).await?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Store the listing for `repo`, creating the buffer directory if
    /// needed.
    pub async fn put(&self, repo: &str, listing: &serde_json::Value) -> Result<(), SourceError> {
        fs::create_dir_all(&self.dir).await?;
        let body = serde_json::to_string_pretty(listing)?;
        fs::write(self.entry_path(repo), body).await?;
        Ok(())
    }

    /// Remove every buffered listing. The directory itself is kept.
    pub async fn clear(&self) -> Result<(), SourceError> {
        if !self.dir.is_dir() {
            return Ok(());
        }
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.is_dir() {
                fs::remove_dir_all(&path).await?;
            } else {
                fs::remove_file(&path).await?;
            }
        }
        Ok(())
    }

    fn entry_path(&self, repo: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_repo_name(repo)))
    }
}

/// Map a repository name (`owner/name`) to a flat filename: anything
/// outside `[A-Za-z0-9.-_]` becomes `_`.
pub fn sanitize_repo_name(repo: &str) -> String {
    repo.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
