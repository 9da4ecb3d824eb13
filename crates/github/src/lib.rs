//! GitHub release source for the LOTA build catalog.
//!
//! Fetches release listings from the GitHub REST API, optionally
//! replaying them from an on-disk buffer, and downloads the small text
//! sidecar assets (properties, checksum files) the assembler merges.

pub mod buffer;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod source;

pub use error::SourceError;
pub use source::GithubReleaseSource;
