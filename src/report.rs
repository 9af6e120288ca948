//! Human-readable rendering of comparison results

use crate::compare::Discrepancy;

/// Render a discrepancy report.
///
/// An empty discrepancy renders as a single success line. Otherwise each
/// non-empty category gets a labeled listing: bare paths for the two
/// only-on-one-side categories, path plus both digests for mismatches.
/// Pure rendering; no decision logic and no I/O.
pub fn render(discrepancy: &Discrepancy) -> String {
    if discrepancy.is_empty() {
        return "All files match.".to_string();
    }

    let mut out = String::new();

    if !discrepancy.only_in_expected.is_empty() {
        out.push_str("Files expected but missing from the directory:\n");
        for key in &discrepancy.only_in_expected {
            out.push_str("  ");
            out.push_str(key);
            out.push('\n');
        }
    }

    if !discrepancy.only_in_actual.is_empty() {
        out.push_str("Files in the directory but not expected:\n");
        for key in &discrepancy.only_in_actual {
            out.push_str("  ");
            out.push_str(key);
            out.push('\n');
        }
    }

    if !discrepancy.mismatched.is_empty() {
        out.push_str("Files with mismatched digests:\n");
        for mismatch in &discrepancy.mismatched {
            out.push_str(&format!(
                "  {}\n    expected: {}\n    actual:   {}\n",
                mismatch.key, mismatch.expected, mismatch.actual
            ));
        }
    }

    out
}
