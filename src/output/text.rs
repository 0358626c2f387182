use std::io::{Stderr, Stdout, Write};
use std::path::Path;

use crate::commands::ScanSummary;
use crate::error::{Result, WhitespaceGuardError};

use super::{ColorMode, ErrorOutput};

/// Receives scan events as they happen.
///
/// Violations are reported while the walk is still running, one call per
/// offending file.
pub trait ScanReporter {
    /// Report a file whose line `line` is the first one ending in whitespace.
    ///
    /// # Errors
    /// Returns an error if the report cannot be written.
    fn violation(&mut self, path: &Path, line: usize) -> Result<()>;

    /// Report an entry or file that could not be checked.
    fn skipped(&mut self, error: &WhitespaceGuardError);

    /// Report a file that was checked and found clean.
    fn passed(&mut self, _path: &Path) {}

    /// Called once after the walk completes.
    fn finish(&mut self, _summary: &ScanSummary) {}
}

/// The stdout line for one offending file.
#[must_use]
pub fn format_violation(path: &Path) -> String {
    format!("{} contains trailing whitespace", path.display())
}

/// Plain text reporter: violation lines on `out`, diagnostics on `err`.
pub struct TextReporter<O: Write, E: Write> {
    out: O,
    err: E,
    diagnostics: ErrorOutput,
    verbose: u8,
    quiet: bool,
}

impl TextReporter<Stdout, Stderr> {
    #[must_use]
    pub fn stdio(color: ColorMode, verbose: u8, quiet: bool) -> Self {
        Self::new(
            std::io::stdout(),
            std::io::stderr(),
            ErrorOutput::new(color),
        )
        .with_verbosity(verbose, quiet)
    }
}

impl<O: Write, E: Write> TextReporter<O, E> {
    #[must_use]
    pub const fn new(out: O, err: E, diagnostics: ErrorOutput) -> Self {
        Self {
            out,
            err,
            diagnostics,
            verbose: 0,
            quiet: false,
        }
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8, quiet: bool) -> Self {
        self.verbose = verbose;
        self.quiet = quiet;
        self
    }

    /// Consume the reporter and hand back both streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> ScanReporter for TextReporter<O, E> {
    fn violation(&mut self, path: &Path, line: usize) -> Result<()> {
        writeln!(self.out, "{}", format_violation(path))?;
        self.out.flush()?;

        if self.verbose >= 1 && !self.quiet {
            self.diagnostics
                .write_detail(&mut self.err, &format!("{}:{line}", path.display()));
        }
        Ok(())
    }

    fn skipped(&mut self, error: &WhitespaceGuardError) {
        if self.quiet {
            return;
        }
        let detail = error.detail();
        self.diagnostics
            .write_warning(&mut self.err, &format!("{error} (skipped)"), detail.as_deref());
    }

    fn passed(&mut self, path: &Path) {
        if self.verbose >= 2 && !self.quiet {
            let _ = writeln!(self.err, "ok: {}", path.display());
        }
    }

    fn finish(&mut self, summary: &ScanSummary) {
        if self.verbose >= 2 && !self.quiet {
            let _ = writeln!(
                self.err,
                "Checked {} files: {} with trailing whitespace, {} skipped",
                summary.checked, summary.violations, summary.skipped
            );
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
