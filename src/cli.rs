use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::commands::ScanOptions;
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color diagnostics when stderr is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "whitespace-guard")]
#[command(author, version, about = "Fail when .txt, .c, .cpp or .h files contain trailing whitespace")]
#[command(long_about = "Recursively checks .txt, .c, .cpp and .h files for lines ending in a \
    space or tab. Each offending file is printed once to stdout as \
    '<path> contains trailing whitespace'.\n\n\
    Exit codes:\n  \
    0 - No trailing whitespace found\n  \
    1 - Trailing whitespace found (or skipped files with --strict)\n  \
    2 - A path could not be scanned or the arguments are invalid")]
pub struct Cli {
    /// Directories or files to check
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Skip files ignored by .gitignore, global git excludes and .git/info/exclude
    #[arg(long)]
    pub gitignore: bool,

    /// Treat files that could not be read or decoded as failures
    #[arg(long)]
    pub strict: bool,

    /// Increase diagnostic output on stderr (-v line numbers, -vv per-file trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Suppress warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output of diagnostics
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            paths: self.paths.clone(),
            exclude: self.exclude.clone(),
            use_gitignore: self.gitignore,
            strict: self.strict,
            verbose: self.verbose,
            quiet: self.quiet,
            color: self.color.into(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
