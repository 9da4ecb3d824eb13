use lota_core::error::CoreError;
use lota_github::SourceError;

/// Errors from release assembly and manifest output.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Listing or asset fetch failed.
    #[error("Release source error: {0}")]
    Source(#[from] SourceError),

    /// A version string, properties file, or checksum file was malformed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A fetched property value was not in the expected format.
    #[error("Parse failure: {0}")]
    Parse(String),

    /// Output directory could not be created, cleared, or written.
    #[error("Output write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest serialization failed.
    #[error("Manifest encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
