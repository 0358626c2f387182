mod result;

pub use result::{CheckResult, LineCheck};

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::PathBuf;

use crate::error::WhitespaceGuardError;

pub trait Checker {
    /// Check a single file and classify it as passed, failed or skipped.
    fn check(&self, path: PathBuf) -> CheckResult;
}

/// Flags files that contain a line ending in a space or tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingWhitespaceChecker;

impl TrailingWhitespaceChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Checker for TrailingWhitespaceChecker {
    fn check(&self, path: PathBuf) -> CheckResult {
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(source) => {
                let error = WhitespaceGuardError::FileRead {
                    path: path.clone(),
                    source,
                };
                return CheckResult::Skipped { path, error };
            }
        };

        match check_reader(BufReader::new(file)) {
            Ok(check) => CheckResult::from_line_check(path, check),
            Err(source) if source.kind() == ErrorKind::InvalidData => {
                let error = WhitespaceGuardError::InvalidEncoding { path: path.clone() };
                CheckResult::Skipped { path, error }
            }
            Err(source) => {
                let error = WhitespaceGuardError::FileRead {
                    path: path.clone(),
                    source,
                };
                CheckResult::Skipped { path, error }
            }
        }
    }
}

/// Read lines until the first one with trailing whitespace.
///
/// Stops pulling from `reader` as soon as an offending line is found, so
/// content after it (including undecodable bytes) is never read.
///
/// # Errors
/// Returns an I/O error if reading fails. Content that is not valid UTF-8
/// yields an error of kind [`ErrorKind::InvalidData`].
pub fn check_reader<R: BufRead>(mut reader: R) -> std::io::Result<LineCheck> {
    let mut buf = String::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Ok(LineCheck::Clean);
        }

        for line in split_lines(&buf) {
            line_number += 1;
            if has_trailing_whitespace(line) {
                return Ok(LineCheck::TrailingWhitespace { line: line_number });
            }
        }
    }
}

/// True if the last character of `line` is a space or a horizontal tab.
///
/// `line` must already have its terminator removed. Empty lines never match.
#[must_use]
pub fn has_trailing_whitespace(line: &str) -> bool {
    line.ends_with([' ', '\t'])
}

/// Split a chunk returned by `read_line` into lines.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line. A chunk ending in a
/// lone `\r` at end of input yields one extra empty line, which never matches.
fn split_lines(chunk: &str) -> std::str::Split<'_, char> {
    strip_line_terminator(chunk).split('\r')
}

/// Remove one `\n` or `\r\n` terminator, nothing else.
fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
