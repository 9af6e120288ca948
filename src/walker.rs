//! Directory walker producing the actual-side file map

use crate::digest;
use crate::error::VerifyError;
use crate::types::FileMap;
use parking_lot::Mutex;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use walkdir::WalkDir;

/// Upper bound on hashing threads; beyond this the walk is I/O bound.
const MAX_HASH_WORKERS: usize = 8;

/// Walk `root` and hash every regular file beneath it, at any depth.
///
/// Keys are paths relative to `root`, `/`-separated and prefixed with a
/// leading `/`. Directories are recursed into but never emitted; empty
/// directories contribute nothing. Symbolic links are not followed, so
/// symlink cycles cannot occur and symlink entries contribute nothing.
///
/// The walk is all-or-nothing: any listing or read error aborts it with the
/// offending path, and no partial map is returned.
pub fn walk(root: &Path) -> Result<FileMap, VerifyError> {
    let files = collect_files(root)?;
    hash_files(root, &files)
}

/// Enumerate every regular file under `root`.
fn collect_files(root: &Path) -> Result<Vec<PathBuf>, VerifyError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            match e.into_io_error() {
                Some(io) => VerifyError::io(path, io),
                None => VerifyError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop detected"),
                ),
            }
        })?;
        if entry.file_type().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}

/// Hash the enumerated files across a small worker pool.
///
/// Each file's hash is computed independently; results merge into the final
/// map under a lock. The first worker error wins and aborts the walk.
fn hash_files(root: &Path, files: &[PathBuf]) -> Result<FileMap, VerifyError> {
    if files.is_empty() {
        return Ok(FileMap::new());
    }

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(MAX_HASH_WORKERS)
        .min(files.len());

    let map = Mutex::new(FileMap::new());
    let failure: Mutex<Option<VerifyError>> = Mutex::new(None);
    let cursor = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| loop {
                let index = cursor.fetch_add(1, Ordering::Relaxed);
                if index >= files.len() || failure.lock().is_some() {
                    break;
                }
                let path = &files[index];
                match digest::hash_file(path) {
                    Ok(hash) => match file_key(root, path) {
                        Ok(key) => {
                            map.lock().insert(key, hash);
                        }
                        Err(e) => {
                            failure.lock().get_or_insert(e);
                            break;
                        }
                    },
                    Err(e) => {
                        failure.lock().get_or_insert(e);
                        break;
                    }
                }
            });
        }
    });

    if let Some(e) = failure.into_inner() {
        return Err(e);
    }
    Ok(map.into_inner())
}

/// Normalize a file's path relative to `root` into a map key.
///
/// `<root>/sub/dir/file.txt` becomes `/sub/dir/file.txt` regardless of the
/// host path-separator convention.
fn file_key(root: &Path, path: &Path) -> Result<String, VerifyError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        VerifyError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("path escapes root {}", root.display()),
            ),
        )
    })?;

    let mut key = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            key.push('/');
            key.push_str(&part.to_string_lossy());
        }
    }
    Ok(key)
}
