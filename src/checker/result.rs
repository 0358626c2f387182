use std::path::PathBuf;

use crate::error::WhitespaceGuardError;

/// Outcome of scanning one reader for trailing whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCheck {
    /// No line ends in a space or tab.
    Clean,
    /// `line` is the 1-based number of the first offending line.
    TrailingWhitespace { line: usize },
}

/// Result of checking one file.
///
/// `Skipped` carries the reason the file could not be checked. A skipped file
/// is neither a violation nor a pass.
#[derive(Debug)]
pub enum CheckResult {
    Passed {
        path: PathBuf,
    },
    Failed {
        path: PathBuf,
        line: usize,
    },
    Skipped {
        path: PathBuf,
        error: WhitespaceGuardError,
    },
}

impl CheckResult {
    #[must_use]
    pub fn from_line_check(path: PathBuf, check: LineCheck) -> Self {
        match check {
            LineCheck::Clean => Self::Passed { path },
            LineCheck::TrailingWhitespace { line } => Self::Failed { path, line },
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
