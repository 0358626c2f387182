use crate::{EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

use super::ScanSummary;

/// Determine exit code from the scan summary.
///
/// - violations always fail
/// - `strict`: files or entries that could not be checked also fail
#[must_use]
pub const fn determine_exit_code(summary: &ScanSummary, strict: bool) -> i32 {
    if summary.has_violations() || (strict && summary.has_skipped()) {
        EXIT_VIOLATIONS_FOUND
    } else {
        EXIT_SUCCESS
    }
}
