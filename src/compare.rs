//! File map comparison

use crate::types::FileMap;

/// Result of comparing the expected and actual file maps: three independent
/// categories, each sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discrepancy {
    /// Keys present in the expected map but missing from the directory.
    pub only_in_expected: Vec<String>,
    /// Keys present in the directory but absent from the expected map.
    pub only_in_actual: Vec<String>,
    /// Keys present on both sides with differing digests.
    pub mismatched: Vec<DigestMismatch>,
}

/// A key whose digests differ between the two sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestMismatch {
    pub key: String,
    pub expected: String,
    pub actual: String,
}

impl Discrepancy {
    /// True when both sides matched exactly.
    pub fn is_empty(&self) -> bool {
        self.only_in_expected.is_empty()
            && self.only_in_actual.is_empty()
            && self.mismatched.is_empty()
    }
}

/// Compare two file maps.
///
/// Pure and deterministic. Digest comparison is case-insensitive. Output
/// sequences follow the maps' sorted key order, so the result is stable for
/// a given pair of inputs. Runs in O(|expected| + |actual|) via map lookups.
pub fn compare(expected: &FileMap, actual: &FileMap) -> Discrepancy {
    let mut result = Discrepancy::default();

    for (key, expected_digest) in expected {
        match actual.get(key) {
            None => result.only_in_expected.push(key.clone()),
            Some(actual_digest) if !expected_digest.eq_ignore_ascii_case(actual_digest) => {
                result.mismatched.push(DigestMismatch {
                    key: key.clone(),
                    expected: expected_digest.clone(),
                    actual: actual_digest.clone(),
                });
            }
            Some(_) => {}
        }
    }

    for key in actual.keys() {
        if !expected.contains_key(key) {
            result.only_in_actual.push(key.clone());
        }
    }

    result
}
