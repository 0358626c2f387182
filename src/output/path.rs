//! Path normalization for glob matching.

use std::path::{Path, PathBuf};

/// Normalize a path for consistent glob pattern matching.
///
/// Strips a leading `./` (or `.\`) and converts backslashes to forward
/// slashes, so `vendor/**` matches `./vendor/zlib/inflate.c` on every
/// platform. A bare `.` becomes an empty path.
#[must_use]
pub fn normalize_for_matching(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();

    let stripped = path_str
        .strip_prefix("./")
        .or_else(|| path_str.strip_prefix(".\\"))
        .unwrap_or(&path_str);

    if stripped.is_empty() || stripped == "." {
        return PathBuf::new();
    }

    if stripped.contains('\\') {
        PathBuf::from(stripped.replace('\\', "/"))
    } else {
        PathBuf::from(stripped)
    }
}
