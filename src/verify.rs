//! Verification run orchestration

use crate::compare::{self, Discrepancy};
use crate::error::VerifyError;
use crate::manifest::file::ManifestFile;
use crate::manifest::remote::AssetListClient;
use crate::manifest::ExpectedSource;
use crate::walker;
use std::path::PathBuf;
use tracing::{debug, info};

/// Inputs for one verification run.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Directory of built assets to verify.
    pub dist_dir: PathBuf,
    /// Static JSON manifest path. Mutually exclusive with `canister_id`.
    pub assets_json: Option<PathBuf>,
    /// Remote canister identifier. Mutually exclusive with `assets_json`.
    pub canister_id: Option<String>,
}

/// Select the expected-map source from the mutually exclusive inputs.
///
/// Runs before any filesystem or network access; supplying both sources or
/// neither is a usage error.
pub fn select_source(options: &VerifyOptions) -> Result<Box<dyn ExpectedSource>, VerifyError> {
    match (&options.assets_json, &options.canister_id) {
        (Some(path), None) => Ok(Box::new(ManifestFile::new(path.clone()))),
        (None, Some(id)) => Ok(Box::new(AssetListClient::new(id.clone())?)),
        (Some(_), Some(_)) => Err(VerifyError::Usage(
            "supply only one of --assetsJson and --canisterId".to_string(),
        )),
        (None, None) => Err(VerifyError::Usage(
            "one of --assetsJson or --canisterId is required".to_string(),
        )),
    }
}

/// Run one verification: build both maps, compare, return the discrepancy.
///
/// The expected and actual maps are independent and are evaluated
/// concurrently; the blocking directory walk runs off the async runtime.
pub async fn run(options: &VerifyOptions) -> Result<Discrepancy, VerifyError> {
    let source = select_source(options)?;
    info!(
        source = %source.describe(),
        dist_dir = %options.dist_dir.display(),
        "starting verification"
    );

    let root = options.dist_dir.clone();
    let walk_task = tokio::task::spawn_blocking(move || walker::walk(&root));
    let (expected, walked) = tokio::join!(source.expected_map(), walk_task);

    let expected = expected?;
    let actual = walked.map_err(|e| {
        VerifyError::io(
            options.dist_dir.clone(),
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("directory walk task failed: {}", e),
            ),
        )
    })??;

    debug!(
        expected = expected.len(),
        actual = actual.len(),
        "both file maps built"
    );

    Ok(compare::compare(&expected, &actual))
}
