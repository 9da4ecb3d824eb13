//! Sidecar file parsing: build properties and checksum listings.
//!
//! Both formats are line-oriented text fetched from release assets. The
//! keys the assembler reads from a properties file are defined here so
//! they live next to the parser.

use std::collections::HashMap;

use crate::error::CoreError;

/// Build time in unix seconds.
pub const PROP_BUILD_DATE_UTC: &str = "ro.build.date.utc";
/// Incremental build identifier.
pub const PROP_INCREMENTAL: &str = "ro.build.version.incremental";
/// Android API level.
pub const PROP_API_LEVEL: &str = "ro.build.version.sdk";
/// Primary device identifier key.
pub const PROP_DEVICE: &str = "ro.lineage.device";
/// Legacy device identifier key, used as fallback.
pub const PROP_DEVICE_LEGACY: &str = "ro.cm.device";

/// Parse a properties file: one `key=value` per line. Blank lines and
/// lines starting with `#` are ignored; a non-comment line without `=`
/// is a parse failure. Values may contain `=`.
pub fn parse_properties(body: &str) -> Result<HashMap<String, String>, CoreError> {
    let mut properties = HashMap::new();
    for line in body.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(CoreError::Parse(format!("Malformed property line: '{line}'")));
        };
        properties.insert(key.to_string(), value.to_string());
    }
    Ok(properties)
}

/// Parse a checksum file: one `checksum  filename` pair per line
/// (two-space separator), mapped as filename -> checksum. Blank lines
/// are ignored; a line without the separator is a parse failure.
pub fn parse_md5sums(body: &str) -> Result<HashMap<String, String>, CoreError> {
    let mut checksums = HashMap::new();
    for line in body.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let Some((checksum, filename)) = line.split_once("  ") else {
            return Err(CoreError::Parse(format!("Malformed checksum line: '{line}'")));
        };
        checksums.insert(filename.to_string(), checksum.to_string());
    }
    Ok(checksums)
}
