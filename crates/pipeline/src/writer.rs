//! Manifest file output.

use std::path::PathBuf;

use tokio::fs;

use lota_core::build::BuildRecord;
use lota_core::manifest::group_manifests;

use crate::error::PipelineError;

/// Default output directory for manifest files.
pub const DEFAULT_OUTPUT_DIR: &str = "api/v1";

/// Writes one manifest file per (model, channel) group.
pub struct ManifestWriter {
    dir: PathBuf,
}

impl ManifestWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write the full catalog. The output directory is created if absent
    /// and cleared before writing. Returns the number of manifests
    /// written.
    pub async fn write_all(&self, records: &[BuildRecord]) -> Result<usize, PipelineError> {
        self.prepare_dir().await?;

        let groups = group_manifests(records);
        for group in &groups {
            let body = serde_json::to_string_pretty(&group.manifest)?;
            let path = self.dir.join(group.file_name());
            fs::write(&path, body).await?;
            tracing::debug!(
                path = %path.display(),
                builds = group.manifest.response.len(),
                "Wrote manifest"
            );
        }
        Ok(groups.len())
    }

    /// Create the output directory if needed and remove any previous run's
    /// contents.
    async fn prepare_dir(&self) -> Result<(), PipelineError> {
        fs::create_dir_all(&self.dir).await?;
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
}
