//! Tests for rendering system

use super::*;
use crate::buffer::Cursor;
use crate::syntax::{Highlighter, Language, RuleSet};

fn rev() -> String {
    color::attribute(Attribute::Reverse)
}

fn off() -> String {
    color::reset()
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn frame<'a>(buffer: &'a TextBuffer) -> Frame<'a> {
    Frame {
        buffer,
        mode: Mode::Insert,
        title: "Title",
        hint: None,
        line_numbers: false,
        highlighter: None,
        search_input: "",
        message: None,
        rows: 0..buffer.line_count(),
        color: true,
    }
}

// ============================================================================
// paint_line
// ============================================================================

#[test]
fn test_paint_plain_line() {
    assert_eq!(paint_line(&chars("hello"), &[], None), "hello");
    assert_eq!(paint_line(&[], &[], None), "");
}

#[test]
fn test_paint_cursor_mid_line() {
    let rev = rev();
    let off = off();
    assert_eq!(
        paint_line(&chars("abc"), &[], Some(1)),
        format!("a{rev}b{off}c")
    );
}

#[test]
fn test_paint_cursor_at_end_is_inverse_space() {
    let rev = rev();
    let off = off();
    assert_eq!(paint_line(&chars("ab"), &[], Some(2)), format!("ab{rev} {off}"));
    assert_eq!(paint_line(&[], &[], Some(0)), format!("{rev} {off}"));
}

#[test]
fn test_paint_spans() {
    let off = off();
    let red = Color::Red.fg();
    let spans = [Span { start: 1, end: 3, color: Color::Red }];
    assert_eq!(
        paint_line(&chars("abcd"), &spans, None),
        format!("a{red}bc{off}d")
    );
}

#[test]
fn test_paint_span_at_end_of_line_is_closed() {
    let off = off();
    let red = Color::Red.fg();
    let spans = [Span { start: 2, end: 4, color: Color::Red }];
    assert_eq!(paint_line(&chars("abcd"), &spans, None), format!("ab{red}cd{off}"));
}

#[test]
fn test_paint_cursor_inside_span_restores_color() {
    let rev = rev();
    let off = off();
    let red = Color::Red.fg();
    let spans = [Span { start: 0, end: 3, color: Color::Red }];
    assert_eq!(
        paint_line(&chars("abc"), &spans, Some(1)),
        format!("{red}a{rev}b{off}{red}c{off}")
    );
}

#[test]
fn test_paint_cursor_on_last_span_char() {
    let rev = rev();
    let off = off();
    let red = Color::Red.fg();
    let spans = [Span { start: 0, end: 3, color: Color::Red }];
    assert_eq!(
        paint_line(&chars("abcd"), &spans, Some(2)),
        format!("{red}ab{rev}c{off}d")
    );
}

#[test]
fn test_paint_skips_overlapping_spans() {
    let off = off();
    let red = Color::Red.fg();
    let spans = [
        Span { start: 0, end: 2, color: Color::Red },
        Span { start: 1, end: 3, color: Color::Blue },
    ];
    assert_eq!(paint_line(&chars("abc"), &spans, None), format!("{red}ab{off}c"));
}

// ============================================================================
// render_frame
// ============================================================================

#[test]
fn test_frame_starts_with_clear_and_title() {
    let buffer = TextBuffer::new();
    let out = render_frame(&frame(&buffer));
    let expected_head = format!(
        "{}{}{}Title\r\n\r\n",
        ansi::HIDE_CURSOR,
        ansi::CLEAR_SCREEN,
        ansi::RESET_CURSOR
    );
    assert!(out.starts_with(&expected_head));
}

#[test]
fn test_frame_lines_use_crlf() {
    let buffer = TextBuffer::from_lines(["one", "two"]);
    let out = render_frame(&frame(&buffer));
    assert!(!out.replace("\r\n", "").contains('\n'));
}

#[test]
fn test_frame_active_line_has_marker_and_cursor() {
    let rev = rev();
    let off = off();
    let mut buffer = TextBuffer::from_lines(["one", "two"]);
    buffer.set_cursor(Cursor::new(1, 3));
    let out = render_frame(&frame(&buffer));

    let marker = color::wrap(MARKER_COLOR, "> ");
    assert!(out.contains(&format!("{marker}two{rev} {off}\r\n")));
    assert!(out.contains(&format!("{off}  one\r\n")));
}

#[test]
fn test_frame_border_and_line_numbers() {
    let buffer = TextBuffer::from_lines(["a", "b"]);
    let mut f = frame(&buffer);
    assert!(render_frame(&f).contains(&format!("   {} ", ui::BORDER)));

    f.line_numbers = true;
    let out = render_frame(&f);
    assert!(out.contains(&format!("  1 {} ", ui::BORDER)));
    assert!(out.contains(&format!("  2 {} ", ui::BORDER)));
}

#[test]
fn test_frame_hint() {
    let buffer = TextBuffer::new();
    let mut f = frame(&buffer);
    f.hint = Some("type here");
    let out = render_frame(&f);
    assert!(out.contains(&format!("Title\r\n{}\r\n", color::wrap(GUTTER_COLOR, "type here"))));
}

#[test]
fn test_frame_status_line() {
    let mut buffer = TextBuffer::from_lines(["abc", "def"]);
    buffer.set_cursor(Cursor::new(1, 2));
    let out = render_frame(&frame(&buffer));
    assert!(out.contains("INSERT  Ln 2, Col 3  Plain Text"));
    assert!(out.contains(ui::HELP));

    let f = Frame { highlighter: Some(&Language::Rust as &dyn Highlighter), ..frame(&buffer) };
    assert!(render_frame(&f).contains("Ln 2, Col 3  Rust"));
}

#[test]
fn test_frame_search_line_only_in_search_mode() {
    let rev = rev();
    let off = off();
    let buffer = TextBuffer::new();
    let mut f = frame(&buffer);
    f.search_input = "needle";
    assert!(!render_frame(&f).contains(ui::SEARCH_PROMPT));

    f.mode = Mode::Search;
    let out = render_frame(&f);
    assert!(out.contains(&format!("{}{rev}needle {off}\r\n", ui::SEARCH_PROMPT)));
    assert!(out.contains("SEARCH  Ln 1, Col 1"));
}

#[test]
fn test_frame_message() {
    let buffer = TextBuffer::new();
    let mut f = frame(&buffer);
    f.message = Some("Pattern not found: x");
    assert!(render_frame(&f).ends_with(&format!(
        "{}\r\n",
        color::wrap(MESSAGE_COLOR, "Pattern not found: x")
    )));
}

#[test]
fn test_frame_highlights_every_visible_line() {
    let rev = rev();
    let off = off();
    let set = RuleSet::new("t").rule("x", Color::Red).unwrap();
    let buffer = TextBuffer::from_lines(["x", "ax"]);
    let f = Frame { highlighter: Some(&set as &dyn Highlighter), ..frame(&buffer) };
    let out = render_frame(&f);
    let red = Color::Red.fg();
    // active row 0 with the cursor on the highlighted char
    assert!(out.contains(&format!("{rev}x{off}\r\n")));
    assert!(out.contains(&format!("  a{red}x{off}\r\n")));
}

#[test]
fn test_frame_draws_only_visible_rows() {
    let rev = rev();
    let off = off();
    let mut buffer = TextBuffer::from_lines(["r0", "r1", "r2", "r3"]);
    buffer.set_cursor(Cursor::new(2, 0));
    let f = Frame { rows: 1..3, ..frame(&buffer) };
    let out = render_frame(&f);
    assert!(!out.contains("r0"));
    assert!(out.contains("r1"));
    assert!(out.contains(&format!("{rev}r{off}2")));
    assert!(!out.contains("r3"));
}

#[test]
fn test_chrome_rows_and_gutter_width() {
    assert_eq!(chrome_rows(Mode::Insert, false), 4);
    assert_eq!(chrome_rows(Mode::Search, true), 6);
    assert_eq!(gutter_width(1), 3);
    assert_eq!(gutter_width(999), 3);
    assert_eq!(gutter_width(1000), 4);
}

#[test]
fn test_frame_without_color_has_no_color_codes() {
    let set = RuleSet::new("t").rule("x", Color::Red).unwrap();
    let mut buffer = TextBuffer::from_lines(["ax", "bx"]);
    buffer.set_cursor(Cursor::new(1, 0));
    let f = Frame {
        highlighter: Some(&set as &dyn Highlighter),
        hint: Some("hint"),
        color: false,
        ..frame(&buffer)
    };
    let out = render_frame(&f);
    assert!(!out.contains(&Color::Red.fg()));
    assert!(!out.contains(&GUTTER_COLOR.fg()));
    assert!(out.contains(&format!("   {}   ax\r\n", ui::BORDER)));
    assert!(out.contains(&format!("> {}b{}x", rev(), off())));
    assert!(out.contains("Title\r\nhint\r\n"));
}
