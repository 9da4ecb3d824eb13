//! Well-known channel and distribution-family name constants.
//!
//! These must match the channel values published in existing manifests;
//! update-checking clients compare them by exact string equality.

/// Default channel when an archive filename carries no channel hint.
pub const CHANNEL_STABLE: &str = "stable";

/// Canonical channel for remapped legacy "unofficial" builds.
pub const CHANNEL_NIGHTLY: &str = "nightly";

/// Canonical channel for remapped legacy "experimental" builds.
pub const CHANNEL_SNAPSHOT: &str = "snapshot";

/// Legacy channel hint remapped to [`CHANNEL_SNAPSHOT`].
pub const HINT_EXPERIMENTAL: &str = "experimental";

/// Legacy channel hint remapped to [`CHANNEL_NIGHTLY`].
pub const HINT_UNOFFICIAL: &str = "unofficial";

/// Short code of the legacy distribution family (CyanogenMod).
pub const FAMILY_CM: &str = "cm";

/// Short code of the current distribution family (LineageOS).
pub const FAMILY_LINEAGE: &str = "lineage";

/// Builds versioned below this threshold use the legacy channel naming
/// regardless of family.
pub const LEGACY_NAMING_THRESHOLD: &str = "14.1";
