//! Per-device, per-channel manifest projection.
//!
//! The published schema carries two historically-compatible field name
//! sets pointing at the same values: the CyanogenMod-era fields
//! (`incremental` .. `filename`) and the LineageOS fields
//! (`romtype` .. `size`). Clients of either generation read the same file.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::build::BuildRecord;

/// One published build entry, dual-schema.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    // CyanogenMod-era schema
    pub incremental: String,
    pub api_level: String,
    pub url: String,
    pub timestamp: i64,
    pub md5sum: String,
    pub changes: String,
    pub channel: String,
    pub filename: String,
    // LineageOS schema (romtype == channel, datetime == timestamp, id == uid)
    pub romtype: String,
    pub datetime: i64,
    pub version: String,
    pub id: String,
    pub size: u64,
}

impl From<&BuildRecord> for ManifestEntry {
    fn from(record: &BuildRecord) -> Self {
        Self {
            incremental: record.incremental.clone().unwrap_or_default(),
            api_level: record.api_level.clone().unwrap_or_default(),
            url: record.url.clone(),
            timestamp: record.timestamp,
            md5sum: record.md5.clone().unwrap_or_default(),
            changes: record.changelog_url.clone(),
            channel: record.channel.clone(),
            filename: record.filename.clone(),
            romtype: record.channel.clone(),
            datetime: record.timestamp,
            version: record.version.clone(),
            id: record.uid.clone(),
            size: record.size,
        }
    }
}

/// The body of one manifest file.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub response: Vec<ManifestEntry>,
}

/// One manifest plus the (model, channel) pair it is published under.
#[derive(Debug, Clone)]
pub struct ManifestGroup {
    pub model: String,
    pub channel: String,
    pub manifest: Manifest,
}

impl ManifestGroup {
    /// Published file name: `<model>_<channel>`, no extension.
    pub fn file_name(&self) -> String {
        format!("{}_{}", self.model, self.channel)
    }
}

/// Group records into one manifest per (model, channel) pair with at
/// least one match. Models and channels compare by exact string equality;
/// pairs with zero matches produce no group.
pub fn group_manifests(records: &[BuildRecord]) -> Vec<ManifestGroup> {
    let models: BTreeSet<&str> = records.iter().map(|r| r.model.as_str()).collect();
    let channels: BTreeSet<&str> = records.iter().map(|r| r.channel.as_str()).collect();

    let mut groups = Vec::new();
    for model in &models {
        for channel in &channels {
            let response: Vec<ManifestEntry> = records
                .iter()
                .filter(|r| r.model == *model && r.channel == *channel)
                .map(ManifestEntry::from)
                .collect();
            if !response.is_empty() {
                groups.push(ManifestGroup {
                    model: (*model).to_string(),
                    channel: (*channel).to_string(),
                    manifest: Manifest { response },
                });
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, channel: &str) -> BuildRecord {
        BuildRecord {
            model: model.to_string(),
            channel: channel.to_string(),
            url: "https://example.com/build.zip".to_string(),
            filename: "build.zip".to_string(),
            timestamp: 1577836800,
            version: "17.1".to_string(),
            size: 4096,
            changelog_url: "https://example.com/releases/1".to_string(),
            uid: "deadbeef".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn groups_only_pairs_with_matches() {
        // Two models, two channels, but only three populated pairs.
        let records = vec![
            record("i9300", "nightly"),
            record("i9300", "stable"),
            record("i9100", "nightly"),
        ];
        let groups = group_manifests(&records);
        assert_eq!(groups.len(), 3);
        assert!(groups
            .iter()
            .all(|g| !(g.model == "i9100" && g.channel == "stable")));
    }

    #[test]
    fn response_length_equals_match_count() {
        let records = vec![
            record("i9300", "nightly"),
            record("i9300", "nightly"),
            record("i9300", "stable"),
        ];
        let groups = group_manifests(&records);
        let nightly = groups
            .iter()
            .find(|g| g.model == "i9300" && g.channel == "nightly")
            .unwrap();
        assert_eq!(nightly.manifest.response.len(), 2);
    }

    #[test]
    fn model_and_channel_compare_case_sensitively() {
        let records = vec![record("i9300", "nightly"), record("I9300", "nightly")];
        let groups = group_manifests(&records);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn no_records_no_groups() {
        assert!(group_manifests(&[]).is_empty());
    }

    #[test]
    fn file_name_joins_model_and_channel() {
        let groups = group_manifests(&[record("i9300", "nightly")]);
        assert_eq!(groups[0].file_name(), "i9300_nightly");
    }

    #[test]
    fn entry_carries_both_schemas_from_one_record() {
        let mut rec = record("i9300", "nightly");
        rec.incremental = Some("eng.20200101".to_string());
        rec.api_level = Some("29".to_string());
        rec.md5 = Some("abc123".to_string());

        let entry = ManifestEntry::from(&rec);
        assert_eq!(entry.romtype, entry.channel);
        assert_eq!(entry.datetime, entry.timestamp);
        assert_eq!(entry.id, rec.uid);
        assert_eq!(entry.incremental, "eng.20200101");
        assert_eq!(entry.api_level, "29");
        assert_eq!(entry.md5sum, "abc123");
        assert_eq!(entry.changes, rec.changelog_url);
    }

    #[test]
    fn missing_optional_fields_project_to_empty_strings() {
        let entry = ManifestEntry::from(&record("i9300", "nightly"));
        assert_eq!(entry.incremental, "");
        assert_eq!(entry.api_level, "");
        assert_eq!(entry.md5sum, "");

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["md5sum"], "");
        assert_eq!(json["size"], 4096);
    }
}
