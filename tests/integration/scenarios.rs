//! End-to-end verification scenarios against a manifest file

use distverify::compare::DigestMismatch;
use distverify::digest;
use distverify::verify::{self, VerifyOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a manifest declaring identity-encoded digests for the given keys.
fn write_manifest(path: &Path, entries: &[(&str, &str)]) {
    let records: Vec<serde_json::Value> = entries
        .iter()
        .map(|(key, sha)| {
            serde_json::json!({
                "key": key,
                "encodings": [
                    {
                        "content_encoding": "identity",
                        "sha256": [sha],
                        "modified": "2024-01-01T00:00:00Z",
                        "length": 1
                    }
                ]
            })
        })
        .collect();
    fs::write(path, serde_json::to_string_pretty(&records).unwrap()).unwrap();
}

fn options(dist_dir: &Path, manifest: &Path) -> VerifyOptions {
    VerifyOptions {
        dist_dir: dist_dir.to_path_buf(),
        assets_json: Some(manifest.to_path_buf()),
        canister_id: None,
    }
}

#[tokio::test]
async fn all_files_match_yields_empty_discrepancy() {
    let temp = TempDir::new().unwrap();
    let dist = temp.path().join("dist");
    fs::create_dir(&dist).unwrap();
    fs::write(dist.join("a.js"), "console.log('a');").unwrap();

    let manifest = temp.path().join("assets.json");
    let sha = digest::hash_bytes(b"console.log('a');");
    write_manifest(&manifest, &[("/a.js", &sha)]);

    let result = verify::run(&options(&dist, &manifest)).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn changed_content_is_reported_as_mismatch() {
    let temp = TempDir::new().unwrap();
    let dist = temp.path().join("dist");
    fs::create_dir(&dist).unwrap();
    fs::write(dist.join("a.js"), "changed content").unwrap();

    let manifest = temp.path().join("assets.json");
    let declared = digest::hash_bytes(b"original content");
    write_manifest(&manifest, &[("/a.js", &declared)]);

    let result = verify::run(&options(&dist, &manifest)).await.unwrap();

    assert!(result.only_in_expected.is_empty());
    assert!(result.only_in_actual.is_empty());
    assert_eq!(
        result.mismatched,
        vec![DigestMismatch {
            key: "/a.js".to_string(),
            expected: declared,
            actual: digest::hash_bytes(b"changed content"),
        }]
    );
}

#[tokio::test]
async fn missing_file_is_reported_as_only_in_expected() {
    let temp = TempDir::new().unwrap();
    let dist = temp.path().join("dist");
    fs::create_dir(&dist).unwrap();
    fs::write(dist.join("a.js"), "present").unwrap();

    let manifest = temp.path().join("assets.json");
    let sha_a = digest::hash_bytes(b"present");
    let sha_b = digest::hash_bytes(b"never built");
    write_manifest(&manifest, &[("/a.js", &sha_a), ("/b.js", &sha_b)]);

    let result = verify::run(&options(&dist, &manifest)).await.unwrap();

    assert_eq!(result.only_in_expected, vec!["/b.js"]);
    assert!(result.only_in_actual.is_empty());
    assert!(result.mismatched.is_empty());
}

#[tokio::test]
async fn extra_file_is_reported_as_only_in_actual() {
    let temp = TempDir::new().unwrap();
    let dist = temp.path().join("dist");
    fs::create_dir(&dist).unwrap();
    fs::write(dist.join("a.js"), "present").unwrap();
    fs::write(dist.join("extra.js"), "stray").unwrap();

    let manifest = temp.path().join("assets.json");
    let sha_a = digest::hash_bytes(b"present");
    write_manifest(&manifest, &[("/a.js", &sha_a)]);

    let result = verify::run(&options(&dist, &manifest)).await.unwrap();

    assert_eq!(result.only_in_actual, vec!["/extra.js"]);
    assert!(result.only_in_expected.is_empty());
    assert!(result.mismatched.is_empty());
}

#[tokio::test]
async fn uppercase_manifest_digest_is_not_a_mismatch() {
    let temp = TempDir::new().unwrap();
    let dist = temp.path().join("dist");
    fs::create_dir(&dist).unwrap();
    fs::write(dist.join("a.js"), "case test").unwrap();

    let manifest = temp.path().join("assets.json");
    let sha = digest::hash_bytes(b"case test").to_uppercase();
    write_manifest(&manifest, &[("/a.js", &sha)]);

    let result = verify::run(&options(&dist, &manifest)).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn nested_files_use_normalized_keys() {
    let temp = TempDir::new().unwrap();
    let dist = temp.path().join("dist");
    fs::create_dir_all(dist.join("sub/dir")).unwrap();
    fs::write(dist.join("sub/dir/file.txt"), "nested").unwrap();

    let manifest = temp.path().join("assets.json");
    let sha = digest::hash_bytes(b"nested");
    write_manifest(&manifest, &[("/sub/dir/file.txt", &sha)]);

    let result = verify::run(&options(&dist, &manifest)).await.unwrap();
    assert!(result.is_empty());
}
