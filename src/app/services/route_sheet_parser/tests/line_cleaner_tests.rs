//! Tests for line preprocessing

use super::super::line_cleaner::{SheetLine, clean_line, is_comment, preprocess_lines};

#[test]
fn test_clean_line_replaces_nbsp_and_trims() {
    assert_eq!(clean_line("\u{00A0}12\u{00A0}Main St  "), "12 Main St");
}

#[test]
fn test_clean_line_applies_nfkc() {
    // Ligature, full-width digits and a decomposed accent
    assert_eq!(clean_line("\u{FB01}eld"), "field");
    assert_eq!(clean_line("\u{FF11}\u{FF12} Elm"), "12 Elm");
    assert_eq!(clean_line("Cafe\u{0301}"), "Caf\u{00E9}");
}

#[test]
fn test_clean_line_keeps_leading_tabs() {
    assert_eq!(clean_line("  \tActive\tnote \r"), "\tActive\tnote");
}

#[test]
fn test_clean_line_trims_trailing_tabs() {
    assert_eq!(clean_line("1 Main St\tactive\t"), "1 Main St\tactive");
    assert_eq!(clean_line("1 Main St, active\t \t\r"), "1 Main St, active");
}

#[test]
fn test_is_comment() {
    assert!(is_comment("# heading"));
    assert!(is_comment("//note"));
    assert!(!is_comment("1 Main St # rear"));
    assert!(!is_comment("/ single slash"));
}

#[test]
fn test_preprocess_lines_drops_empty_and_comments() {
    let lines = preprocess_lines("# title\n\n1 Main St\n  \n// aside\n2 Oak Dr", true);

    assert_eq!(
        lines,
        vec![
            SheetLine {
                number: 3,
                text: "1 Main St".to_string()
            },
            SheetLine {
                number: 6,
                text: "2 Oak Dr".to_string()
            },
        ]
    );
}

#[test]
fn test_preprocess_lines_keeps_comments_when_disabled() {
    let lines = preprocess_lines("# title\n1 Main St", false);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "# title");
}

#[test]
fn test_preprocess_lines_comment_after_cleaning() {
    // Leading spaces are removed before the comment check
    let lines = preprocess_lines("   # indented comment\n1 Main St", true);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].number, 2);
}
