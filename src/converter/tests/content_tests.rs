//! Tests for turning file content into records and line statistics

use super::MIXED_INPUT;
use crate::converter::convert_content;
use crate::line_protocol::{LineParser, MalformedRecord};
use crate::models::MalformedLine;

#[test]
fn test_mixed_input_keeps_order_and_counts() {
    let (records, stats) = convert_content(MIXED_INPUT, &LineParser::default());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].measurement(), "cpu");
    assert_eq!(records[1].measurement(), "mem");

    assert_eq!(stats.total_lines, 4);
    assert_eq!(stats.records, 2);
    assert_eq!(stats.blank_lines, 1);
    assert_eq!(stats.comment_lines, 0);
    assert_eq!(stats.malformed_lines, 1);
    assert_eq!(
        stats.malformed,
        vec![MalformedLine {
            line_number: 4,
            reason: MalformedRecord::MissingFields,
        }]
    );
}

#[test]
fn test_crlf_line_endings() {
    let content = "cpu value=1 10\r\nmem value=2\r\n";

    let (records, stats) = convert_content(content, &LineParser::default());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].timestamp(), "10");
    assert_eq!(records[1].timestamp(), "");
    assert_eq!(stats.total_lines, 2);
}

#[test]
fn test_byte_order_mark_is_ignored() {
    let content = "\u{feff}cpu value=1\n";

    let (records, _) = convert_content(content, &LineParser::default());

    assert_eq!(records[0].measurement(), "cpu");
}

#[test]
fn test_comments_skipped_or_kept() {
    let content = "# header comment\ncpu value=1\n";

    let (records, stats) = convert_content(content, &LineParser::new(true));
    assert_eq!(records.len(), 1);
    assert_eq!(stats.comment_lines, 1);

    let (records, stats) = convert_content(content, &LineParser::new(false));
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].measurement(), "#");
    assert_eq!(records[0].fields(), "header");
    assert_eq!(records[0].timestamp(), "comment");
    assert_eq!(stats.comment_lines, 0);
}

#[test]
fn test_unterminated_quote_is_counted_but_kept() {
    let content = "log msg=\"open\nlog msg=\"closed\" 5\n";

    let (records, stats) = convert_content(content, &LineParser::default());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].fields(), "msg=\"open");
    assert_eq!(stats.unterminated_quotes, 1);
}

#[test]
fn test_quote_opened_in_timestamp_is_counted() {
    let content = "cpu v=1 \"123\ncpu v=1 \"123\"\n";

    let (records, stats) = convert_content(content, &LineParser::default());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].fields(), "v=1");
    assert_eq!(records[0].timestamp(), "\"123");
    assert_eq!(stats.unterminated_quotes, 1);
}

#[test]
fn test_empty_content() {
    let (records, stats) = convert_content("", &LineParser::default());

    assert!(records.is_empty());
    assert_eq!(stats.total_lines, 0);
    assert_eq!(stats.success_rate(), 0.0);
}
