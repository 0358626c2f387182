use std::path::PathBuf;

use super::*;

#[test]
fn from_line_check_clean_is_passed() {
    let result = CheckResult::from_line_check(PathBuf::from("a.c"), LineCheck::Clean);

    assert!(matches!(result, CheckResult::Passed { path } if path == PathBuf::from("a.c")));
}

#[test]
fn from_line_check_trailing_is_failed() {
    let result = CheckResult::from_line_check(
        PathBuf::from("a.c"),
        LineCheck::TrailingWhitespace { line: 7 },
    );

    assert!(matches!(
        result,
        CheckResult::Failed { path, line: 7 } if path == PathBuf::from("a.c")
    ));
}
