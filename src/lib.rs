//! Distverify: deployment asset verification
//!
//! Verifies that a locally built directory of deployment assets matches an
//! expected manifest of content hashes, taken either from a static manifest
//! file or from a live remote asset listing.

pub mod cli;
pub mod compare;
pub mod digest;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod types;
pub mod verify;
pub mod walker;
