//! Static JSON manifest parsing

use super::{ExpectedSource, IDENTITY_ENCODING};
use crate::error::VerifyError;
use crate::types::FileMap;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One asset entry in the manifest document: a key plus its encoding
/// variants, in document order.
#[derive(Debug, Deserialize)]
pub struct AssetRecord {
    pub key: String,
    pub encodings: Vec<EncodingEntry>,
}

/// One content-encoding variant of an asset.
///
/// `modified` and `length` are carried by the document but play no part in
/// comparison.
#[derive(Debug, Deserialize)]
pub struct EncodingEntry {
    pub content_encoding: String,
    /// Single-element container holding the hex digest; absent or empty
    /// means no digest is available for this encoding.
    #[serde(default)]
    pub sha256: Option<Vec<String>>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub length: Option<u64>,
}

impl AssetRecord {
    /// Digest of the first identity-encoded entry, lowercased.
    ///
    /// The first entry whose label matches wins; if it carries no digest the
    /// record contributes nothing, even when a later identity entry does.
    fn identity_digest(&self) -> Option<String> {
        self.encodings
            .iter()
            .find(|e| e.content_encoding == IDENTITY_ENCODING)
            .and_then(|e| e.sha256.as_ref())
            .and_then(|container| container.first())
            .map(|digest| digest.to_lowercase())
    }
}

/// File-based expected source: parses a JSON manifest document.
#[derive(Debug)]
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ExpectedSource for ManifestFile {
    async fn expected_map(&self) -> Result<FileMap, VerifyError> {
        load_manifest(&self.path)
    }

    fn describe(&self) -> String {
        format!("manifest file {}", self.path.display())
    }
}

/// Read and decode a manifest document into a file map.
///
/// A document that is not a valid record array fails the whole parse; no
/// partial manifest is ever returned. Records with no identity entry, or
/// whose identity entry carries no digest, contribute nothing.
pub fn load_manifest(path: &Path) -> Result<FileMap, VerifyError> {
    let raw = std::fs::read_to_string(path).map_err(|e| VerifyError::io(path, e))?;
    let records: Vec<AssetRecord> = serde_json::from_str(&raw)
        .map_err(|e| VerifyError::Parse(format!("{}: {}", path.display(), e)))?;
    Ok(to_file_map(records))
}

fn to_file_map(records: Vec<AssetRecord>) -> FileMap {
    let mut map = FileMap::new();
    for record in records {
        if let Some(digest) = record.identity_digest() {
            map.insert(record.key, digest);
        }
    }
    map
}
