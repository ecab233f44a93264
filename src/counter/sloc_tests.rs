use super::*;
use crate::counter::test_fixtures::{c_syntax, python_syntax};
use std::io::Cursor;

#[test]
fn line_stats_default() {
    let stats = LineStats::default();
    assert_eq!(stats, LineStats::new());
    assert_eq!(stats.sloc(), 0);
}

#[test]
fn count_empty_source() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let stats = counter.count("");

    assert_eq!(stats.total, 0);
    assert_eq!(stats.sloc(), 0);
}

#[test]
fn blank_only_file_has_zero_sloc() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let stats = counter.count("\n\n   \n\t\n\n");

    assert_eq!(stats.total, 5);
    assert_eq!(stats.blank, 5);
    assert_eq!(stats.sloc(), 0);
}

#[test]
fn count_code_only() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "int main() {\n    return 0;\n}";
    let stats = counter.count(source);

    assert_eq!(stats.total, 3);
    assert_eq!(stats.code, 3);
    assert_eq!(stats.comment, 0);
    assert_eq!(stats.blank, 0);
}

#[test]
fn count_trailing_comment_line_as_code() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let stats = counter.count("int x = 1; // note");

    assert_eq!(stats.sloc(), 1);
    assert_eq!(stats.comment, 0);
}

#[test]
fn count_block_comment_spanning_three_lines() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let stats = counter.count("/*\ninterior\n*/\n");

    assert_eq!(stats.total, 3);
    assert_eq!(stats.comment, 3);
    assert_eq!(stats.sloc(), 0);
}

#[test]
fn count_inline_block_comment() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let stats = counter.count("code /* c */ more");

    assert_eq!(stats.sloc(), 1);
}

#[test]
fn count_mixed_source() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "// header\n\n#include <stdio.h>\n/* a\n   b */\nint main() { /* x */\n  return 0; // ok\n}\n";
    let stats = counter.count(source);

    assert_eq!(stats.total, 8);
    assert_eq!(stats.code, 4);
    assert_eq!(stats.comment, 3);
    assert_eq!(stats.blank, 1);
}

#[test]
fn python_end_to_end_sample() {
    let syntax = python_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "# comment\nx = 1\n\n\"\"\"\nblock\ncomment\n\"\"\"\ny = 2\n";
    let stats = counter.count(source);

    assert_eq!(stats.total, 8);
    assert_eq!(stats.sloc(), 2);
    assert_eq!(stats.blank, 1);
    assert_eq!(stats.comment, 5);
}

#[test]
fn state_does_not_leak_between_counts() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);

    let first = counter.count("/* never closed\nstill comment");
    assert_eq!(first.sloc(), 0);

    let second = counter.count("code();");
    assert_eq!(second.sloc(), 1);
}

#[test]
fn count_reader_matches_count() {
    let syntax = python_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "# c\nx = 1\n'''\ndoc\n'''\n\ny = 2";

    let from_str = counter.count(source);
    let from_reader = counter.count_reader(Cursor::new(source)).unwrap();

    assert_eq!(from_str, from_reader);
}

#[test]
fn count_reader_handles_crlf() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let stats = counter
        .count_reader(Cursor::new("a();\r\n\r\n// c\r\n"))
        .unwrap();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.code, 1);
    assert_eq!(stats.blank, 1);
    assert_eq!(stats.comment, 1);
}

#[test]
fn count_reader_tolerates_invalid_utf8() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let bytes: &[u8] = b"int a = 1;\n\xff\xfe// bad\nint \xc3(b);\n";
    let stats = counter.count_reader(Cursor::new(bytes)).unwrap();

    assert_eq!(stats.total, 3);
    // The replacement characters before `//` survive as code.
    assert_eq!(stats.code, 3);
}

#[test]
fn count_reader_without_trailing_newline() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let stats = counter.count_reader(Cursor::new("a();\nb();")).unwrap();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.sloc(), 2);
}

#[test]
fn totals_add_up() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let stats = counter.count("a\n\n// b\n/*\n*/\nc /* d");

    assert_eq!(stats.total, stats.code + stats.comment + stats.blank);
}

#[test]
fn count_file_reads_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("main.c");
    std::fs::write(&path, "// c\nint main() {}\n").unwrap();

    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let stats = counter.count_file(&path).unwrap();

    assert_eq!(stats.sloc(), 1);
    assert_eq!(stats.comment, 1);
}

#[test]
fn count_file_missing_is_file_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.c");

    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let err = counter.count_file(&path).unwrap_err();

    assert_eq!(err.error_type(), "FileRead");
    assert!(err.to_string().contains("absent.c"));
}

#[test]
fn count_reader_treats_lone_cr_as_line_end() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let stats = counter
        .count_reader(Cursor::new(b"int a;\r/* x */\rint b;\r"))
        .unwrap();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.sloc(), 2);
    assert_eq!(stats.comment, 1);
}

#[test]
fn mixed_line_endings_split_like_text_mode() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    // "a\r" + "\r\n" + "b\n" + "\r" + "c" is five physical lines.
    let source = "a();\r\r\nb();\n\rc();";

    let stats = counter.count(source);
    assert_eq!(stats.total, 5);
    assert_eq!(stats.code, 3);
    assert_eq!(stats.blank, 2);

    let from_reader = counter.count_reader(Cursor::new(source)).unwrap();
    assert_eq!(stats, from_reader);
}

#[test]
fn block_comment_spans_cr_only_lines() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let stats = counter.count("/*\rstill comment\r*/ x = 1;\r");

    assert_eq!(stats.total, 3);
    assert_eq!(stats.comment, 2);
    assert_eq!(stats.sloc(), 1);
}
