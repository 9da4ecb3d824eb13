//! Build-record assembly and manifest output.
//!
//! Consumes releases from a [`source::ReleaseSource`], normalizes each
//! into at most one [`lota_core::build::BuildRecord`], and publishes the
//! catalog as per-(model, channel) manifest files.

pub mod assembler;
pub mod error;
pub mod source;
pub mod writer;

pub use error::PipelineError;
