//! The canonical, normalized build record.

use crate::hashing::sha256_hex;

/// One normalized build, merged from a release's archive, properties,
/// checksum, and changelog assets.
///
/// Fields sourced only from sidecar files (`incremental`, `api_level`,
/// `md5`) are `Option`s: `None` means the corresponding asset was absent
/// or carried no matching entry, and projects to an empty string in the
/// published manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildRecord {
    /// Direct download URL of the archive.
    pub url: String,
    /// Canonical release channel.
    pub channel: String,
    /// Archive filename as published.
    pub filename: String,
    /// Build time in unix seconds.
    pub timestamp: i64,
    /// Device model identifier.
    pub model: String,
    /// Version token from the archive filename.
    pub version: String,
    /// Archive size in bytes.
    pub size: u64,
    /// `ro.build.version.incremental` from the properties file.
    pub incremental: Option<String>,
    /// `ro.build.version.sdk` from the properties file.
    pub api_level: Option<String>,
    /// Checksum for this archive, when a checksum file listed it.
    pub md5: Option<String>,
    /// Changelog download URL, or the release page URL as fallback.
    pub changelog_url: String,
    /// Stable identifier; see [`BuildRecord::compute_uid`].
    pub uid: String,
}

impl BuildRecord {
    /// Stable identifier: SHA-256 hex of `{timestamp}{model}{api_level}`.
    ///
    /// Deliberately independent of filename and URL, so two records
    /// describing the same build keep the same identity across re-uploads.
    /// This is a grouping key, not a cryptographic guarantee.
    pub fn compute_uid(&self) -> String {
        let seed = format!(
            "{}{}{}",
            self.timestamp,
            self.model,
            self.api_level.as_deref().unwrap_or("")
        );
        sha256_hex(seed.as_bytes())
    }
}
