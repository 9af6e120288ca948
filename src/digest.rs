//! Content digest computation using SHA-256

use crate::error::VerifyError;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const READ_BUF_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 digest of a file's contents as lowercase hex.
///
/// Reads in chunks so arbitrarily large files never have to fit in memory.
/// Read failures propagate tagged with the offending path; a file that
/// vanished between enumeration and read is an error, not a skip.
pub fn hash_file(path: &Path) -> Result<String, VerifyError> {
    let mut file = File::open(path).map_err(|e| VerifyError::io(path, e))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; READ_BUF_SIZE];
    loop {
        let n = file.read(&mut buf).map_err(|e| VerifyError::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(to_hex(hasher.finalize().as_slice()))
}

/// Compute the SHA-256 digest of a byte slice as lowercase hex.
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    to_hex(hasher.finalize().as_slice())
}

/// Encode bytes as lowercase hex, two digits per byte, zero-padded.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
