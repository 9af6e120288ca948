//! Error types for the asset verification tool.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a verification run.
///
/// Every kind terminates the run; nothing is retried and no partial
/// comparison is ever produced.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Invalid, conflicting, or missing CLI inputs. Detected before any
    /// filesystem or network access.
    #[error("usage error: {0}")]
    Usage(String),

    /// File read or directory listing failure, tagged with the offending path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest document failed structural validation.
    #[error("failed to parse asset manifest: {0}")]
    Parse(String),

    /// Failure to reach the remote listing endpoint or decode its response.
    /// Distinct from [`VerifyError::Io`] so local-disk problems can be told
    /// apart from remote-service problems.
    #[error("remote asset listing failed: {0}")]
    Network(String),
}

impl VerifyError {
    /// Tag an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VerifyError::Io {
            path: path.into(),
            source,
        }
    }
}
