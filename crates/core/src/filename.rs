//! Archive filename tokenization.
//!
//! Build archives are named `type?-version-date?-channel-trailingA?-trailingB?`,
//! e.g. `lineage-17.1-20200101-nightly-i9300-signed.zip` or
//! `cm-11.0-20140504-SNAPSHOT-M6-i9300.zip`. A single anchored pattern
//! extracts six positional tokens; what the two trailing tokens mean
//! depends on the distribution family, so interpretation is a separate,
//! explicit step ([`FilenameTokens::trailing`]).

use std::sync::LazyLock;

use regex::Regex;

use crate::channels::FAMILY_CM;

/// Pattern matching the six positional filename tokens. `version` and
/// `channel` are required; the rest are optional.
pub const ARCHIVE_NAME_PATTERN: &str =
    r"^([A-Za-z0-9]+)?-([0-9.]+)-([\d_]+)?-([\w+]+)-([A-Za-z0-9_]+)?-?([\w+]+)?";

/// Compiled filename pattern. Compiled once, reused for every archive.
static ARCHIVE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ARCHIVE_NAME_PATTERN).expect("valid regex"));

/// The six positional tokens of an archive filename. Tokens that did not
/// match are empty strings; an entirely unparseable filename yields six
/// empty tokens, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilenameTokens {
    /// Distribution family short code, e.g. `cm` or `lineage`.
    pub distribution_type: String,
    /// Dotted or bare numeric version, e.g. `11.0`, `17.1`.
    pub version: String,
    /// Numeric build date stamp, e.g. `20200101`.
    pub build_date: String,
    /// Free-text channel token, e.g. `NIGHTLY`, `RC2`.
    pub channel_hint: String,
    /// First trailing token; meaning depends on the family.
    pub trailing_a: String,
    /// Second trailing token; meaning depends on the family.
    pub trailing_b: String,
}

/// Family-tagged reading of the two trailing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingTokens<'a> {
    /// Legacy `cm` scheme: an opaque snapshot build code, then the model.
    Legacy {
        snapshot_code: &'a str,
        model: &'a str,
    },
    /// Current scheme: the model, then a `signed` marker.
    Current { model: &'a str, signed: &'a str },
}

impl TrailingTokens<'_> {
    /// Device model, wherever the family put it.
    pub fn model(&self) -> &str {
        match self {
            Self::Legacy { model, .. } | Self::Current { model, .. } => model,
        }
    }
}

impl FilenameTokens {
    /// Interpret the trailing tokens according to the distribution family.
    pub fn trailing(&self) -> TrailingTokens<'_> {
        if self.distribution_type == FAMILY_CM {
            TrailingTokens::Legacy {
                snapshot_code: &self.trailing_a,
                model: &self.trailing_b,
            }
        } else {
            TrailingTokens::Current {
                model: &self.trailing_a,
                signed: &self.trailing_b,
            }
        }
    }
}

/// Tokenize an archive filename. Each matched token is trimmed of
/// surrounding dashes.
pub fn tokenize_archive_name(name: &str) -> FilenameTokens {
    let Some(caps) = ARCHIVE_NAME_RE.captures(name) else {
        return FilenameTokens::default();
    };
    let token = |index: usize| -> String {
        caps.get(index)
            .map(|m| m.as_str().trim_matches('-').to_string())
            .unwrap_or_default()
    };
    FilenameTokens {
        distribution_type: token(1),
        version: token(2),
        build_date: token(3),
        channel_hint: token(4),
        trailing_a: token(5),
        trailing_b: token(6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_current_family_filename() {
        let tokens = tokenize_archive_name("lineage-17.1-20200101-nightly-i9300-signed.zip");
        assert_eq!(tokens.distribution_type, "lineage");
        assert_eq!(tokens.version, "17.1");
        assert_eq!(tokens.build_date, "20200101");
        assert_eq!(tokens.channel_hint, "nightly");
        assert_eq!(tokens.trailing_a, "i9300");
        assert_eq!(tokens.trailing_b, "signed");
    }

    #[test]
    fn tokenizes_legacy_family_filename() {
        let tokens = tokenize_archive_name("cm-11.0-20140504-SNAPSHOT-M6-i9300.zip");
        assert_eq!(tokens.distribution_type, "cm");
        assert_eq!(tokens.version, "11.0");
        assert_eq!(tokens.build_date, "20140504");
        assert_eq!(tokens.channel_hint, "SNAPSHOT");
        assert_eq!(tokens.trailing_a, "M6");
        assert_eq!(tokens.trailing_b, "i9300");
    }

    #[test]
    fn optional_type_and_trailing_b_may_be_absent() {
        let tokens = tokenize_archive_name("-14.1-20170101-nightly-i9300.zip");
        assert_eq!(tokens.distribution_type, "");
        assert_eq!(tokens.version, "14.1");
        assert_eq!(tokens.build_date, "20170101");
        assert_eq!(tokens.channel_hint, "nightly");
        assert_eq!(tokens.trailing_a, "i9300");
        assert_eq!(tokens.trailing_b, "");
    }

    #[test]
    fn unparseable_filename_yields_empty_tokens() {
        assert_eq!(tokenize_archive_name("README.zip"), FilenameTokens::default());
        assert_eq!(tokenize_archive_name(""), FilenameTokens::default());
    }

    #[test]
    fn legacy_family_model_is_trailing_b() {
        let tokens = tokenize_archive_name("cm-11.0-20140504-SNAPSHOT-M6-i9300.zip");
        assert_eq!(tokens.trailing().model(), "i9300");
        assert_eq!(
            tokens.trailing(),
            TrailingTokens::Legacy {
                snapshot_code: "M6",
                model: "i9300",
            }
        );
    }

    #[test]
    fn current_family_model_is_trailing_a() {
        let tokens = tokenize_archive_name("lineage-17.1-20200101-nightly-i9300-signed.zip");
        assert_eq!(tokens.trailing().model(), "i9300");
    }
}
