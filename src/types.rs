//! Shared types for the verification core.

use std::collections::BTreeMap;

/// Path → digest mapping representing one side of a comparison.
///
/// Keys are normalized paths relative to the asset root: always prefixed with
/// `/` and separated by `/` regardless of host convention. Values are 64-char
/// lowercase hex SHA-256 digests. Built once per run, never mutated after
/// construction. Sorted iteration gives the comparator its stable output
/// ordering.
pub type FileMap = BTreeMap<String, String>;
