//! CLI parse: clap types for distverify. No behavior; definitions only.
//!
//! The mutual exclusion of `--assetsJson` and `--canisterId` is enforced in
//! [`crate::verify::select_source`] rather than by clap, so it surfaces as a
//! usage error in the tool's own taxonomy.

use crate::verify::VerifyOptions;
use clap::Parser;
use std::path::PathBuf;

/// Verify a built asset directory against its expected content hashes.
#[derive(Debug, Parser)]
#[command(name = "distverify")]
#[command(about = "Verify a built asset directory against a manifest or remote asset listing")]
pub struct Cli {
    /// Directory of built assets to verify
    #[arg(long = "distDir")]
    pub dist_dir: PathBuf,

    /// Path to a JSON asset manifest (mutually exclusive with --canisterId)
    #[arg(long = "assetsJson")]
    pub assets_json: Option<PathBuf>,

    /// Remote asset canister identifier (mutually exclusive with --assetsJson)
    #[arg(long = "canisterId")]
    pub canister_id: Option<String>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    pub fn options(&self) -> VerifyOptions {
        VerifyOptions {
            dist_dir: self.dist_dir.clone(),
            assets_json: self.assets_json.clone(),
            canister_id: self.canister_id.clone(),
        }
    }
}
