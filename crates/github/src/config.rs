//! Repository list configuration.
//!
//! The config file is a JSON array of `{"name": "owner/repo"}` objects.
//! A missing file is not fatal: the run proceeds with zero repositories
//! and therefore writes no manifests.

use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use crate::error::SourceError;

/// Default path of the repository config file.
pub const DEFAULT_CONFIG_PATH: &str = "github.json";

/// One configured upstream repository.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryEntry {
    /// `owner/name` as used in GitHub API paths.
    pub name: String,
}

/// Load the repository list from `path`.
pub async fn load_repositories(path: &Path) -> Result<Vec<RepositoryEntry>, SourceError> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "No repository config present");
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_repository_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github.json");
        std::fs::write(&path, r#"[{"name": "owner/repo"}, {"name": "other/repo"}]"#).unwrap();

        let repos = load_repositories(&path).await.unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "owner/repo");
    }

    #[tokio::test]
    async fn missing_config_yields_zero_repositories() {
        let dir = tempfile::tempdir().unwrap();
        let repos = load_repositories(&dir.path().join("absent.json")).await.unwrap();
        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_repositories(&path).await.is_err());
    }
}
