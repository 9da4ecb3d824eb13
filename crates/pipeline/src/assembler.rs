//! Build-record assembly: normalizing one release's artifact set.
//!
//! A release yields at most one [`BuildRecord`]. Archives are processed
//! in source order with later archives overwriting earlier ones'
//! filename-derived fields; this matches the previously published
//! manifests and is kept for compatibility. Sidecar merges (properties,
//! checksums, changelog) are applied once, after all archives.

use lota_core::assets::{classify_assets, Release};
use lota_core::build::BuildRecord;
use lota_core::channel::resolve_channel;
use lota_core::filename::tokenize_archive_name;
use lota_core::sidecar::{
    parse_md5sums, parse_properties, PROP_API_LEVEL, PROP_BUILD_DATE_UTC, PROP_DEVICE,
    PROP_DEVICE_LEGACY, PROP_INCREMENTAL,
};

use crate::error::PipelineError;
use crate::source::AssetFetcher;

/// Assemble records for every release, isolating failures per release.
///
/// A fetch or parse failure aborts only the release it occurred in; the
/// failure is logged and assembly continues with the next release.
pub async fn assemble_all<F: AssetFetcher>(fetcher: &F, releases: &[Release]) -> Vec<BuildRecord> {
    let mut records = Vec::new();
    for release in releases {
        match assemble_release(fetcher, release).await {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(
                    release = %release.html_url,
                    error = %e,
                    "Skipping release after assembly failure"
                );
            }
        }
    }
    records
}

/// Assemble zero or one record from a single release.
///
/// Releases without archive assets produce no record; their sidecar
/// assets are not fetched.
pub async fn assemble_release<F: AssetFetcher>(
    fetcher: &F,
    release: &Release,
) -> Result<Option<BuildRecord>, PipelineError> {
    let classified = classify_assets(&release.assets);
    if classified.archives.is_empty() {
        return Ok(None);
    }

    let mut record = BuildRecord::default();

    for archive in &classified.archives {
        let tokens = tokenize_archive_name(&archive.name);
        record.channel =
            resolve_channel(&tokens.channel_hint, &tokens.distribution_type, &tokens.version)?;
        record.url = archive.download_url.clone();
        record.filename = archive.name.clone();
        record.timestamp = archive.updated_at.timestamp();
        record.model = tokens.trailing().model().to_string();
        record.version = tokens.version.clone();
        record.size = archive.size;
    }

    for prop_asset in &classified.properties {
        let body = fetcher.fetch_text(&prop_asset.download_url).await?;
        let properties = parse_properties(&body)?;
        if let Some(raw) = properties.get(PROP_BUILD_DATE_UTC) {
            record.timestamp = raw.parse().map_err(|_| {
                PipelineError::Parse(format!("Non-numeric {PROP_BUILD_DATE_UTC}: '{raw}'"))
            })?;
        }
        record.incremental = properties.get(PROP_INCREMENTAL).cloned();
        record.api_level = properties.get(PROP_API_LEVEL).cloned();
        if let Some(model) = properties
            .get(PROP_DEVICE)
            .or_else(|| properties.get(PROP_DEVICE_LEGACY))
        {
            record.model = model.clone();
        }
    }

    for checksum_asset in &classified.checksums {
        let body = fetcher.fetch_text(&checksum_asset.download_url).await?;
        let checksums = parse_md5sums(&body)?;
        record.md5 = checksums.get(&record.filename).cloned();
    }

    record.changelog_url = classified
        .changelogs
        .last()
        .map(|asset| asset.download_url.clone())
        .unwrap_or_else(|| release.html_url.clone());

    record.uid = record.compute_uid();
    Ok(Some(record))
}
