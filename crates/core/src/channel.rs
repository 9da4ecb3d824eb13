//! Canonical release-channel resolution.
//!
//! Archive filenames carry a free-text channel token whose meaning shifted
//! across version lines: old builds labelled `EXPERIMENTAL` landed on what
//! is now the snapshot channel, and `UNOFFICIAL` on what is now nightly.
//! [`resolve_channel`] lowercases the hint and applies those remaps for
//! the legacy family and for any build below the naming threshold.

use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::channels::{
    CHANNEL_NIGHTLY, CHANNEL_SNAPSHOT, CHANNEL_STABLE, FAMILY_CM, HINT_EXPERIMENTAL,
    HINT_UNOFFICIAL, LEGACY_NAMING_THRESHOLD,
};
use crate::error::CoreError;

static LEGACY_THRESHOLD: LazyLock<BuildVersion> = LazyLock::new(|| {
    LEGACY_NAMING_THRESHOLD
        .parse()
        .expect("valid threshold version")
});

/// Dotted numeric build version, ordered component-wise. Missing trailing
/// components compare as zero, so `14 == 14.0` and `14.1.1 > 14.1`.
///
/// This is not semver: version lines like `17.1` or `11.0` carry however
/// many components the filename had.
#[derive(Debug, Clone)]
pub struct BuildVersion(Vec<u64>);

impl PartialEq for BuildVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BuildVersion {}

impl FromStr for BuildVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CoreError::Parse("Empty version string".to_string()));
        }
        let components = s
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| CoreError::Parse(format!("Invalid version component '{part}' in '{s}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(components))
    }
}

impl Ord for BuildVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.0.len().max(other.0.len());
        for i in 0..len {
            let a = self.0.get(i).copied().unwrap_or(0);
            let b = other.0.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for BuildVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Derive the canonical channel from a raw channel hint, the distribution
/// family, and the version token.
///
/// An empty hint resolves to [`CHANNEL_STABLE`]. Otherwise the lowercased
/// hint passes through, with the legacy remaps applied when the family is
/// `cm` or the version sits below [`LEGACY_NAMING_THRESHOLD`].
///
/// The family check is evaluated first: a `cm` build never parses its
/// version token. When the comparison is needed, an unparseable version
/// surfaces as [`CoreError::Parse`].
pub fn resolve_channel(
    channel_hint: &str,
    distribution_type: &str,
    version: &str,
) -> Result<String, CoreError> {
    let hint = channel_hint.to_lowercase();
    if hint.is_empty() {
        return Ok(CHANNEL_STABLE.to_string());
    }
    let legacy_naming =
        distribution_type == FAMILY_CM || version.parse::<BuildVersion>()? < *LEGACY_THRESHOLD;
    if legacy_naming {
        match hint.as_str() {
            HINT_EXPERIMENTAL => return Ok(CHANNEL_SNAPSHOT.to_string()),
            HINT_UNOFFICIAL => return Ok(CHANNEL_NIGHTLY.to_string()),
            _ => {}
        }
    }
    Ok(hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hint_defaults_to_stable() {
        assert_eq!(resolve_channel("", "lineage", "18.0").unwrap(), "stable");
    }

    #[test]
    fn legacy_family_remaps_experimental_to_snapshot() {
        assert_eq!(resolve_channel("EXPERIMENTAL", "cm", "11.0").unwrap(), "snapshot");
    }

    #[test]
    fn no_remap_above_threshold_for_current_family() {
        assert_eq!(
            resolve_channel("experimental", "lineage", "18.0").unwrap(),
            "experimental"
        );
    }

    #[test]
    fn below_threshold_remap_applies_regardless_of_family() {
        assert_eq!(
            resolve_channel("UNOFFICIAL", "lineage", "10.0").unwrap(),
            "nightly"
        );
    }

    #[test]
    fn passthrough_hint_is_lowercased() {
        assert_eq!(resolve_channel("NIGHTLY", "lineage", "17.1").unwrap(), "nightly");
        assert_eq!(resolve_channel("RC2", "cm", "10.1").unwrap(), "rc2");
    }

    #[test]
    fn unparseable_version_is_an_error_when_compared() {
        let err = resolve_channel("nightly", "lineage", "17.x").unwrap_err();
        assert!(err.to_string().contains("17.x"));
    }

    #[test]
    fn legacy_family_never_parses_the_version() {
        // Evaluation order: the cm check short-circuits the comparison.
        assert_eq!(resolve_channel("nightly", "cm", "garbage").unwrap(), "nightly");
    }

    #[test]
    fn version_ordering_is_numeric_not_lexicographic() {
        let parse = |s: &str| s.parse::<BuildVersion>().unwrap();
        assert!(parse("9.1") < parse("14.1"));
        assert!(parse("17.1") > parse("14.1"));
        assert!(parse("14.1.1") > parse("14.1"));
        assert_eq!(parse("14"), parse("14.0"));
        assert!(parse("14") < parse("14.1"));
    }

    #[test]
    fn malformed_versions_fail_to_parse() {
        assert!("".parse::<BuildVersion>().is_err());
        assert!("17.".parse::<BuildVersion>().is_err());
        assert!(".1".parse::<BuildVersion>().is_err());
        assert!("a.b".parse::<BuildVersion>().is_err());
    }
}
