use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, WhitespaceGuardError};
use crate::output::normalize_for_matching;

/// File name suffixes that are checked for trailing whitespace.
pub const TRACKED_SUFFIXES: [&str; 4] = [".txt", ".c", ".cpp", ".h"];

/// Returns true if the path ends with one of [`TRACKED_SUFFIXES`].
///
/// Matching is a case-sensitive suffix comparison on the whole path string,
/// so `notes.TXT` and `notacpp` are out of scope while `main.cpp` is in.
#[must_use]
pub fn is_tracked(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    TRACKED_SUFFIXES
        .iter()
        .any(|suffix| path_str.ends_with(suffix))
}

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts tracked files that no exclude glob matches.
pub struct SuffixFilter {
    exclude_patterns: GlobSet,
}

impl SuffixFilter {
    /// Create a new filter with the given exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| WhitespaceGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| WhitespaceGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        !self.exclude_patterns.is_empty()
            && self.exclude_patterns.is_match(normalize_for_matching(path))
    }
}

impl Default for SuffixFilter {
    fn default() -> Self {
        Self {
            exclude_patterns: GlobSet::empty(),
        }
    }
}

impl FileFilter for SuffixFilter {
    fn should_include(&self, path: &Path) -> bool {
        is_tracked(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
