mod filter;

pub use filter::{FileFilter, SuffixFilter, TRACKED_SUFFIXES, is_tracked};

use std::fs::FileType;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, WhitespaceGuardError};

/// Lazy sequence of candidate files. Traversal problems surface as `Err` items
/// so the consumer can report them and keep pulling.
pub type Candidates<'a> = Box<dyn Iterator<Item = Result<PathBuf>> + 'a>;

/// Trait for walking a directory tree and yielding in-scope files.
pub trait FileScanner {
    /// Start a fresh traversal of `root`.
    ///
    /// Every in-scope file reachable from `root` is yielded exactly once.
    /// Directory symlinks are not followed.
    fn scan(&self, root: &Path) -> Candidates<'_>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn scan_without_gitignore(&self, root: &Path) -> Candidates<'_> {
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => (is_file_entry(entry.file_type(), entry.path())
                    && self.filter.should_include(entry.path()))
                .then(|| Ok(entry.into_path())),
                Err(err) => Some(Err(WhitespaceGuardError::Walk {
                    path: err.path().map(Path::to_path_buf),
                    message: walk_error_message(&err),
                })),
            });
        Box::new(walker)
    }

    fn scan_with_gitignore(&self, root: &Path) -> Candidates<'_> {
        use ignore::WalkBuilder;

        let walker = WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
            .filter_map(move |entry| match entry {
                Ok(entry) => entry
                    .file_type()
                    .is_some_and(|ft| is_file_entry(ft, entry.path()))
                    .then_some(entry)
                    .filter(|e| self.filter.should_include(e.path()))
                    .map(|e| Ok(e.into_path())),
                Err(err) => Some(Err(WhitespaceGuardError::Walk {
                    path: ignore_error_path(&err),
                    message: err
                        .io_error()
                        .map_or_else(|| err.to_string(), std::string::ToString::to_string),
                })),
            });
        Box::new(walker)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Candidates<'_> {
        if self.use_gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_without_gitignore(root)
        }
    }
}

// A symlink counts as a file when its target is a regular file.
fn is_file_entry(file_type: FileType, path: &Path) -> bool {
    file_type.is_file() || (file_type.is_symlink() && path.is_file())
}

fn walk_error_message(err: &walkdir::Error) -> String {
    err.io_error()
        .map_or_else(|| err.to_string(), std::string::ToString::to_string)
}

// `ignore` wraps the failing path (and depth or line context) around the cause.
fn ignore_error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            ignore_error_path(err)
        }
        ignore::Error::Partial(errs) => errs.iter().find_map(ignore_error_path),
        _ => None,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
