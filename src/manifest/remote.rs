//! Remote asset-listing client
//!
//! Queries the asset endpoint's listing method for a named canister and
//! decodes the result into the expected file map. Digests arrive as raw byte
//! sequences and are hex-encoded here before insertion.
//!
//! Trust boundary: response-signature (certification) verification is
//! deliberately disabled for this client. It trusts transport-level
//! authenticity only; callers relying on end-to-end response integrity must
//! not use this listing as an authority.

use super::{ExpectedSource, IDENTITY_ENCODING};
use crate::digest;
use crate::error::VerifyError;
use crate::types::FileMap;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_GATEWAY: &str = "https://ic0.app";
const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// One asset entry from the remote listing.
#[derive(Debug, Deserialize)]
pub struct RemoteAssetRecord {
    pub key: String,
    pub encodings: Vec<RemoteEncodingEntry>,
}

/// One content-encoding variant from the remote listing. Unlike the file
/// manifest, `sha256` is a raw byte sequence, not hex.
#[derive(Debug, Deserialize)]
pub struct RemoteEncodingEntry {
    pub content_encoding: String,
    /// Raw digest bytes; absent means no digest for this encoding.
    #[serde(default)]
    pub sha256: Option<Vec<u8>>,
    #[serde(default)]
    pub modified: Option<i64>,
    #[serde(default)]
    pub length: Option<u64>,
}

impl RemoteAssetRecord {
    /// Lowercase hex digest of the first identity-encoded entry, if any.
    fn identity_digest(&self) -> Option<String> {
        self.encodings
            .iter()
            .find(|e| e.content_encoding == IDENTITY_ENCODING)
            .and_then(|e| e.sha256.as_ref())
            .map(|bytes| digest::to_hex(bytes))
    }
}

/// Remote expected source: lists assets from a canister endpoint.
#[derive(Debug)]
pub struct AssetListClient {
    client: Client,
    gateway: String,
    canister_id: String,
}

impl AssetListClient {
    pub fn new(canister_id: String) -> Result<Self, VerifyError> {
        Self::with_gateway(canister_id, DEFAULT_GATEWAY.to_string())
    }

    pub fn with_gateway(canister_id: String, gateway: String) -> Result<Self, VerifyError> {
        Ok(Self {
            client: build_http_client()?,
            gateway,
            canister_id,
        })
    }

    /// Invoke the listing query. Takes no filter parameters; the endpoint
    /// returns every asset it serves.
    async fn list_assets(&self) -> Result<Vec<RemoteAssetRecord>, VerifyError> {
        let url = format!(
            "{}/api/v2/canister/{}/assets/list",
            self.gateway, self.canister_id
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_http_error)?
            .error_for_status()
            .map_err(map_http_error)?;
        response
            .json::<Vec<RemoteAssetRecord>>()
            .await
            .map_err(|e| VerifyError::Network(format!("failed to decode asset listing: {}", e)))
    }
}

#[async_trait]
impl ExpectedSource for AssetListClient {
    async fn expected_map(&self) -> Result<FileMap, VerifyError> {
        let records = self.list_assets().await?;
        Ok(to_file_map(records))
    }

    fn describe(&self) -> String {
        format!("asset canister {}", self.canister_id)
    }
}

fn to_file_map(records: Vec<RemoteAssetRecord>) -> FileMap {
    let mut map = FileMap::new();
    for record in records {
        if let Some(hash) = record.identity_digest() {
            map.insert(record.key, hash);
        }
    }
    map
}

fn build_http_client() -> Result<Client, VerifyError> {
    Client::builder()
        .connect_timeout(HTTP_CONNECT_TIMEOUT)
        .timeout(HTTP_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| VerifyError::Network(format!("failed to create HTTP client: {}", e)))
}

fn map_http_error(error: reqwest::Error) -> VerifyError {
    if error.is_timeout() {
        VerifyError::Network(format!("request timeout: {}", error))
    } else if error.is_connect() {
        VerifyError::Network(format!("connection error: {}", error))
    } else if let Some(status) = error.status() {
        VerifyError::Network(format!("request failed with status {}: {}", status, error))
    } else {
        VerifyError::Network(format!("HTTP error: {}", error))
    }
}
