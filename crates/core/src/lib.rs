//! Pure domain logic for the LOTA build catalog.
//!
//! Everything in this crate is synchronous and free of I/O: asset
//! classification, archive filename tokenization, channel resolution,
//! build-record assembly primitives, and the per-device manifest
//! projection. Network and filesystem concerns live in `lota-github`
//! and `lota-pipeline`.

pub mod assets;
pub mod buffer;
pub mod build;
pub mod channel;
pub mod channels;
pub mod error;
pub mod filename;
pub mod hashing;
pub mod manifest;
pub mod sidecar;
