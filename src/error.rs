use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhitespaceGuardError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8 text: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("Cannot walk {}: {message}", display_walk_path(.path.as_deref()))]
    Walk {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("Cannot access scan root: {path}")]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WhitespaceGuardError {
    /// Returns the error type as a short string for display purposes.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::FileRead { .. } => "FileRead",
            Self::InvalidEncoding { .. } => "Encoding",
            Self::Walk { .. } => "Walk",
            Self::RootNotFound { .. } => "Root",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
        }
    }

    /// Returns the underlying cause, formatted for a diagnostic detail line.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::RootNotFound { source, .. } => {
                Some(source.to_string())
            }
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::InvalidEncoding { .. } | Self::Walk { .. } | Self::Io(_) => None,
        }
    }
}

fn display_walk_path(path: Option<&std::path::Path>) -> String {
    path.map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string())
}

pub type Result<T> = std::result::Result<T, WhitespaceGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
