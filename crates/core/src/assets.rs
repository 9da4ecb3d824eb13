//! Release and asset domain types plus role classification.
//!
//! An upstream release attaches a loose bag of files; [`classify_assets`]
//! partitions them into the four roles the assembler understands. Assets
//! matching no rule are dropped.

use chrono::{DateTime, Utc};

/// Content type identifying an archive asset.
pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

/// One published release from an upstream repository.
#[derive(Debug, Clone)]
pub struct Release {
    /// Web page URL of the release. Used as the changelog fallback when
    /// no changelog asset is attached.
    pub html_url: String,
    /// Attached files, in source-provided order.
    pub assets: Vec<Asset>,
}

/// One downloadable file attached to a release.
#[derive(Debug, Clone)]
pub struct Asset {
    /// Filename as published.
    pub name: String,
    /// Direct download URL.
    pub download_url: String,
    /// MIME type reported by the source.
    pub content_type: String,
    /// File size in bytes.
    pub size: u64,
    /// Last-updated time reported by the source.
    pub updated_at: DateTime<Utc>,
}

/// A release's assets partitioned by role. Rebuilt per release; empty
/// buckets are valid.
#[derive(Debug, Default)]
pub struct ClassifiedAssets<'a> {
    /// ZIP archives (the builds themselves).
    pub archives: Vec<&'a Asset>,
    /// `.prop` build property files.
    pub properties: Vec<&'a Asset>,
    /// `.md5sum` checksum files.
    pub checksums: Vec<&'a Asset>,
    /// `.txt` / `.html` changelog files.
    pub changelogs: Vec<&'a Asset>,
}

/// Partition a release's assets into role buckets, preserving source order
/// within each bucket.
pub fn classify_assets(assets: &[Asset]) -> ClassifiedAssets<'_> {
    let mut classified = ClassifiedAssets::default();
    for asset in assets {
        if asset.content_type == ARCHIVE_CONTENT_TYPE {
            classified.archives.push(asset);
            continue;
        }
        match extension(&asset.name) {
            Some("txt") | Some("html") => classified.changelogs.push(asset),
            Some("md5sum") => classified.checksums.push(asset),
            Some("prop") => classified.properties.push(asset),
            _ => {}
        }
    }
    classified
}

/// Final extension of a filename, without the dot. Dotfiles and extensionless
/// names have none.
fn extension(name: &str) -> Option<&str> {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => Some(ext),
        _ => None,
    }
}
