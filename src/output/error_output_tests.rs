use super::*;

fn render_error(use_colors: bool, detail: Option<&str>, suggestion: Option<&str>) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(use_colors).write_error(
        &mut buf,
        "Root",
        "Cannot access scan root: missing",
        detail,
        suggestion,
    );
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    assert_eq!(
        render_error(false, None, None),
        "✖ Root: Cannot access scan root: missing\n"
    );
}

#[test]
fn error_without_colors_full() {
    let result = render_error(
        false,
        Some("No such file or directory (os error 2)"),
        Some("Check that the path exists"),
    );
    assert_eq!(
        result,
        "✖ Root: Cannot access scan root: missing\n  × No such file or directory (os error 2)\n  help: Check that the path exists\n"
    );
}

#[test]
fn error_with_colors_contains_ansi() {
    let result = render_error(true, Some("detail"), None);
    assert!(result.contains(ansi::RED));
    assert!(result.contains(ansi::DIM));
    assert!(result.contains(ansi::RESET));
}

#[test]
fn warning_without_colors() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_warning(
        &mut buf,
        "Skipped ./blob.txt",
        Some("File is not valid UTF-8 text: ./blob.txt"),
    );
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(
        result,
        "⚠ Warning: Skipped ./blob.txt\n  × File is not valid UTF-8 text: ./blob.txt\n"
    );
}

#[test]
fn warning_with_colors_is_yellow() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(true).write_warning(&mut buf, "Skipped x.c", None);
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains(ansi::YELLOW));
    assert!(result.contains("Skipped x.c"));
}

#[test]
fn detail_line_is_indented() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_detail(&mut buf, "line 3");
    assert_eq!(String::from_utf8(buf).unwrap(), "  × line 3\n");
}

#[test]
fn never_mode_disables_colors() {
    let mut buf = Vec::new();
    ErrorOutput::new(ColorMode::Never).write_warning(&mut buf, "plain", None);
    assert!(!String::from_utf8(buf).unwrap().contains('\x1b'));
}
