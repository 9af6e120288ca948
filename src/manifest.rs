//! Expected-side manifest sources
//!
//! Two interchangeable producers of the expected file map: a static JSON
//! manifest document and a live remote asset listing. Both normalize into
//! the same [`FileMap`] shape; exactly one is selected per run, at startup.

pub mod file;
pub mod remote;

use crate::error::VerifyError;
use crate::types::FileMap;
use async_trait::async_trait;

/// Content-encoding label of the uncompressed baseline variant of an asset.
/// Only this encoding's digest participates in comparison; compressed
/// transport variants are ignored.
pub const IDENTITY_ENCODING: &str = "identity";

/// A producer of the expected path → digest map.
#[async_trait]
pub trait ExpectedSource: Send + Sync + std::fmt::Debug {
    /// Produce the expected file map.
    async fn expected_map(&self) -> Result<FileMap, VerifyError>;

    /// Short human description of the source, for logs.
    fn describe(&self) -> String;
}
