//! GitHub REST API response models.
//!
//! Listings are buffered as raw JSON, so these types deserialize from
//! `serde_json::Value` whether the listing came from the network or the
//! buffer, then convert into the neutral core types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use lota_core::assets::{Asset, Release};

/// One release as returned by `GET /repos/{owner}/{repo}/releases`.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRelease {
    /// Web page URL of the release.
    pub html_url: String,
    /// Attached assets, in API order.
    #[serde(default)]
    pub assets: Vec<GithubAsset>,
}

/// One asset attached to a GitHub release.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubAsset {
    pub name: String,
    #[serde(default)]
    pub content_type: String,
    pub size: u64,
    pub browser_download_url: String,
    /// `YYYY-MM-DDTHH:MM:SSZ`, parsed as UTC.
    pub updated_at: DateTime<Utc>,
}

impl From<GithubRelease> for Release {
    fn from(release: GithubRelease) -> Self {
        Release {
            html_url: release.html_url,
            assets: release.assets.into_iter().map(Asset::from).collect(),
        }
    }
}

impl From<GithubAsset> for Asset {
    fn from(asset: GithubAsset) -> Self {
        Asset {
            name: asset.name,
            download_url: asset.browser_download_url,
            content_type: asset.content_type,
            size: asset.size,
            updated_at: asset.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_listing_entry() {
        let raw = serde_json::json!({
            "html_url": "https://github.com/owner/repo/releases/tag/v1",
            "assets": [{
                "name": "lineage-17.1-20200101-nightly-i9300-signed.zip",
                "content_type": "application/zip",
                "size": 4096,
                "browser_download_url": "https://github.com/owner/repo/releases/download/v1/build.zip",
                "updated_at": "2020-01-01T00:00:00Z"
            }]
        });
        let release: GithubRelease = serde_json::from_value(raw).unwrap();
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].updated_at.timestamp(), 1577836800);
    }

    #[test]
    fn converts_into_core_release() {
        let release = GithubRelease {
            html_url: "https://github.com/owner/repo/releases/tag/v1".to_string(),
            assets: vec![GithubAsset {
                name: "build.zip".to_string(),
                content_type: "application/zip".to_string(),
                size: 1,
                browser_download_url: "https://example.com/build.zip".to_string(),
                updated_at: Utc::now(),
            }],
        };
        let core: Release = release.into();
        assert_eq!(core.assets[0].download_url, "https://example.com/build.zip");
        assert_eq!(core.assets[0].content_type, "application/zip");
    }

    #[test]
    fn missing_assets_field_defaults_to_empty() {
        let raw = serde_json::json!({ "html_url": "https://example.com/r" });
        let release: GithubRelease = serde_json::from_value(raw).unwrap();
        assert!(release.assets.is_empty());
    }
}
