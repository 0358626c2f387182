use std::path::PathBuf;

use crate::checker::TrailingWhitespaceChecker;
use crate::error::{Result, WhitespaceGuardError};
use crate::output::{ColorMode, ErrorOutput, ScanReporter, TextReporter};
use crate::scanner::{DirectoryScanner, SuffixFilter};
use crate::EXIT_SCAN_ERROR;

use super::check_exit::determine_exit_code;
use super::check_scan::{ScanSummary, scan_root, validate_root};

/// Everything a check run needs, independent of how it was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub paths: Vec<PathBuf>,
    pub exclude: Vec<String>,
    pub use_gitignore: bool,
    pub strict: bool,
    pub verbose: u8,
    pub quiet: bool,
    pub color: ColorMode,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(".")],
            exclude: Vec::new(),
            use_gitignore: false,
            strict: false,
            verbose: 0,
            quiet: false,
            color: ColorMode::Auto,
        }
    }
}

#[must_use]
pub fn run_check(options: &ScanOptions) -> i32 {
    let mut reporter = TextReporter::stdio(options.color, options.verbose, options.quiet);

    match run_check_impl(options, &mut reporter) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            let detail = e.detail();
            ErrorOutput::new(options.color).print_error(
                e.error_type(),
                &e.to_string(),
                detail.as_deref(),
                suggestion_for(&e),
            );
            EXIT_SCAN_ERROR
        }
    }
}

/// Run a check against `options`, sending results to `reporter`.
///
/// # Errors
/// Returns an error if a root is inaccessible, an exclude pattern is invalid,
/// or writing a violation fails. Per-file problems are reported, not returned.
pub fn run_check_impl<R: ScanReporter>(options: &ScanOptions, reporter: &mut R) -> Result<i32> {
    for root in &options.paths {
        validate_root(root)?;
    }

    let filter = SuffixFilter::new(&options.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, options.use_gitignore);
    let checker = TrailingWhitespaceChecker::new();

    let mut summary = ScanSummary::default();
    for root in &options.paths {
        summary.merge(scan_root(root, &scanner, &checker, reporter)?);
    }

    reporter.finish(&summary);
    Ok(determine_exit_code(&summary, options.strict))
}

const fn suggestion_for(error: &WhitespaceGuardError) -> Option<&'static str> {
    match error {
        WhitespaceGuardError::RootNotFound { .. } => {
            Some("Check that the path exists and is readable")
        }
        WhitespaceGuardError::InvalidPattern { .. } => {
            Some("Exclude patterns use glob syntax, e.g. 'vendor/**' or '**/*.generated.h'")
        }
        _ => None,
    }
}
