//! Tests for the quote/escape separator scanner

use crate::line_protocol::scanner::{ScanState, end_state, find_separator, split_once_unescaped};

#[test]
fn test_find_plain_separator() {
    assert_eq!(find_separator("cpu value=1", ' '), Some(3));
    assert_eq!(find_separator("cpu,host=a", ','), Some(3));
    assert_eq!(find_separator("cpu", ' '), None);
    assert_eq!(find_separator("", ' '), None);
}

#[test]
fn test_escaped_separator_is_content() {
    assert_eq!(find_separator(r"my\ cpu value=1", ' '), Some(7));
    assert_eq!(find_separator(r"host=a\,b", ','), None);
}

#[test]
fn test_double_backslash_does_not_escape_separator() {
    // `\\` is an escaped backslash; the comma after it is live
    assert_eq!(find_separator(r"a\\,b", ','), Some(3));
}

#[test]
fn test_separator_inside_quotes_is_content() {
    let text = r#"msg="a,b c",n=1"#;
    assert_eq!(find_separator(text, ' '), None);
    assert_eq!(find_separator(text, ','), Some(11));
}

#[test]
fn test_escaped_quote_does_not_toggle() {
    let text = r#"msg="say \"hi there\"" 1"#;
    let (before, after) = split_once_unescaped(text, ' ').unwrap();
    assert_eq!(before, r#"msg="say \"hi there\"""#);
    assert_eq!(after, "1");
}

#[test]
fn test_unterminated_quote_swallows_rest_of_line() {
    let text = r#"msg="open ended, never closed 123"#;
    assert_eq!(find_separator(text, ' '), None);
    assert_eq!(find_separator(text, ','), None);
    assert!(end_state(text).in_quote);
}

#[test]
fn test_split_drops_only_the_separator() {
    assert_eq!(split_once_unescaped("a b c", ' '), Some(("a", "b c")));
    assert_eq!(split_once_unescaped("a ", ' '), Some(("a", "")));
    assert_eq!(split_once_unescaped("abc", ' '), None);
}

#[test]
fn test_multibyte_text_splits_on_char_boundary() {
    let (before, after) = split_once_unescaped("température,lieu=été v=1", ',').unwrap();
    assert_eq!(before, "température");
    assert_eq!(after, "lieu=été v=1");
}

#[test]
fn test_state_transitions() {
    let mut state = ScanState::default();
    assert!(!state.step('\\', ' '));
    assert!(state.escape_pending);
    assert!(!state.step(' ', ' '));
    assert!(!state.escape_pending);
    assert!(!state.step('"', ' '));
    assert!(state.in_quote);
    assert!(!state.step(' ', ' '));
    assert!(!state.step('"', ' '));
    assert!(!state.in_quote);
    assert!(state.step(' ', ' '));
}

#[test]
fn test_end_state_reports_dangling_escape() {
    let state = end_state(r"cpu value=1\");
    assert!(state.escape_pending);
    assert!(!state.in_quote);

    assert_eq!(end_state(r#"cpu msg="closed""#), ScanState::default());
}
