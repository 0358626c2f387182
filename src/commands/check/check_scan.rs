use std::path::Path;

use crate::checker::{CheckResult, Checker};
use crate::error::{Result, WhitespaceGuardError};
use crate::output::ScanReporter;
use crate::scanner::FileScanner;

/// Counters accumulated over one or more scan roots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// In-scope files that were read to a verdict.
    pub checked: usize,
    /// Files with at least one trailing-whitespace line, counted once per file.
    pub violations: usize,
    /// Walk errors plus files that could not be read or decoded.
    pub skipped: usize,
}

impl ScanSummary {
    #[must_use]
    pub const fn has_violations(&self) -> bool {
        self.violations > 0
    }

    #[must_use]
    pub const fn has_skipped(&self) -> bool {
        self.skipped > 0
    }

    pub const fn merge(&mut self, other: Self) {
        self.checked += other.checked;
        self.violations += other.violations;
        self.skipped += other.skipped;
    }
}

/// Make sure a scan root exists before any output is produced.
///
/// # Errors
/// Returns [`WhitespaceGuardError::RootNotFound`] if the root cannot be stat'ed.
pub fn validate_root(root: &Path) -> Result<()> {
    std::fs::metadata(root)
        .map(|_| ())
        .map_err(|source| WhitespaceGuardError::RootNotFound {
            path: root.to_path_buf(),
            source,
        })
}

/// Walk `root`, check every candidate and report as results arrive.
///
/// Each file is fully handled before the next one is pulled from the walker.
///
/// # Errors
/// Returns an error only if the reporter fails to write a violation.
pub fn scan_root<S, C, R>(
    root: &Path,
    scanner: &S,
    checker: &C,
    reporter: &mut R,
) -> Result<ScanSummary>
where
    S: FileScanner,
    C: Checker,
    R: ScanReporter,
{
    let mut summary = ScanSummary::default();

    for candidate in scanner.scan(root) {
        let path = match candidate {
            Ok(path) => path,
            Err(error) => {
                summary.skipped += 1;
                reporter.skipped(&error);
                continue;
            }
        };

        match checker.check(path) {
            CheckResult::Passed { path } => {
                summary.checked += 1;
                reporter.passed(&path);
            }
            CheckResult::Failed { path, line } => {
                summary.checked += 1;
                summary.violations += 1;
                reporter.violation(&path, line)?;
            }
            CheckResult::Skipped { error, .. } => {
                summary.skipped += 1;
                reporter.skipped(&error);
            }
        }
    }

    Ok(summary)
}
