//! Rendering system
//! Serialises the text area into one frame of escape sequences

/// ## render/ Invariants
///
/// - Rendering reads buffer and widget state only; it never mutates them.
/// - Every frame is a full repaint: hide cursor, clear, home, then content.
/// - Every emitted line ends with `\r\n` (output runs in raw mode).
/// - The cursor cell is drawn in inverse video on the active line; at end of
///   line it is an inverse space.
/// - Highlight colors are re-applied after the cursor cell so a span keeps its
///   color on both sides of the cursor.
/// - With color off the frame carries no color codes; the cursor cell is
///   still inverse.
/// - The viewport must be updated before building a frame.
use std::fmt::Write as _;
use std::ops::Range;

use crate::buffer::TextBuffer;
use crate::color::{self, Attribute, Color, Painter};
use crate::constants::ui;
use crate::mode::Mode;
use crate::syntax::{self, Highlighter, Span};
use crate::term::ansi;

/// Rows used by everything except buffer lines: title, hint, spacer, status
const FIXED_CHROME_ROWS: usize = 4;

const GUTTER_COLOR: Color = Color::DarkGrey;
const MARKER_COLOR: Color = Color::Green;
const STATUS_COLOR: Color = Color::Ansi256(246);
const MESSAGE_COLOR: Color = Color::Yellow;

/// Everything needed to draw one frame
pub struct Frame<'a> {
    pub buffer: &'a TextBuffer,
    pub mode: Mode,
    pub title: &'a str,
    pub hint: Option<&'a str>,
    pub line_numbers: bool,
    pub highlighter: Option<&'a dyn Highlighter>,
    /// Search term being typed (shown only in Search mode)
    pub search_input: &'a str,
    /// One-shot status message such as a failed search
    pub message: Option<&'a str>,
    /// Buffer rows to draw
    pub rows: Range<usize>,
    /// Emit color escape codes
    pub color: bool,
}

/// Number of screen rows the frame uses besides buffer lines
#[must_use]
pub fn chrome_rows(mode: Mode, has_message: bool) -> usize {
    FIXED_CHROME_ROWS + usize::from(mode == Mode::Search) + usize::from(has_message)
}

/// Width of the line-number column for a buffer of `line_count` lines
#[must_use]
pub fn gutter_width(line_count: usize) -> usize {
    let digits = line_count.max(1).ilog10() as usize + 1;
    digits.max(ui::MIN_GUTTER_WIDTH)
}

/// Build the complete frame
#[must_use]
pub fn render_frame(frame: &Frame<'_>) -> String {
    let paint = Painter::new(frame.color);
    let mut out = String::new();
    out.push_str(ansi::HIDE_CURSOR);
    ansi::write_clear_screen(&mut out);

    // Header
    out.push_str(frame.title);
    out.push_str(ansi::NEWLINE);
    if let Some(hint) = frame.hint {
        out.push_str(&paint.wrap(GUTTER_COLOR, hint));
    }
    out.push_str(ansi::NEWLINE);

    // Content
    let buffer = frame.buffer;
    let cursor = buffer.cursor();
    let width = gutter_width(buffer.line_count());
    let end = frame.rows.end.min(buffer.line_count());
    for row in frame.rows.start.min(end)..end {
        let Some(line) = buffer.line(row) else { break };
        let active = row == cursor.row;

        out.push_str(&paint.fg(GUTTER_COLOR));
        if frame.line_numbers {
            let _ = write!(out, "{:>width$}", row + 1);
        } else {
            out.push_str("  ");
        }
        let _ = write!(out, " {} ", ui::BORDER);
        out.push_str(&paint.reset());

        if active {
            out.push_str(&paint.wrap(MARKER_COLOR, "> "));
        } else {
            out.push_str("  ");
        }

        let spans = frame
            .highlighter
            .filter(|_| paint.enabled())
            .map(|h| h.spans(&line.iter().collect::<String>()))
            .unwrap_or_default();
        out.push_str(&paint_line(line, &spans, active.then_some(cursor.col)));
        out.push_str(ansi::NEWLINE);
    }

    // Status
    out.push_str(ansi::NEWLINE);
    let language = frame.highlighter.map_or(syntax::PLAIN_TEXT, |h| h.name());
    let status = format!(
        " {}  Ln {}, Col {}  {}  {}",
        frame.mode.name(),
        cursor.row + 1,
        cursor.col + 1,
        language,
        ui::HELP
    );
    out.push_str(&paint.wrap(STATUS_COLOR, &status));
    out.push_str(ansi::NEWLINE);

    if frame.mode == Mode::Search {
        out.push_str(ui::SEARCH_PROMPT);
        out.push_str(&color::attribute(Attribute::Reverse));
        out.push_str(frame.search_input);
        out.push(' ');
        out.push_str(&color::reset());
        out.push_str(ansi::NEWLINE);
    }

    if let Some(message) = frame.message {
        out.push_str(&paint.wrap(MESSAGE_COLOR, message));
        out.push_str(ansi::NEWLINE);
    }

    out
}

/// Paint `chars` with `spans`, drawing the cursor cell at `cursor` if given.
///
/// Spans must be sorted and non-overlapping; any that are not are skipped.
/// A cursor at or past the end of the line is drawn as an inverse space.
#[must_use]
pub fn paint_line(chars: &[char], spans: &[Span], cursor: Option<usize>) -> String {
    let reverse = color::attribute(Attribute::Reverse);
    let reset = color::reset();
    let mut out = String::with_capacity(chars.len() + spans.len() * 16);
    let mut pending = spans.iter().peekable();
    let mut active: Option<&Span> = None;

    for (i, &ch) in chars.iter().enumerate() {
        if active.is_some_and(|span| i >= span.end) {
            out.push_str(&reset);
            active = None;
        }
        if active.is_none() {
            while pending
                .peek()
                .is_some_and(|span| span.start < i || span.start >= span.end)
            {
                pending.next();
            }
            if let Some(span) = pending.next_if(|span| span.start == i) {
                out.push_str(&span.color.fg());
                active = Some(span);
            }
        }

        if cursor == Some(i) {
            out.push_str(&reverse);
            out.push(ch);
            out.push_str(&reset);
            match active {
                Some(span) if i + 1 < span.end => out.push_str(&span.color.fg()),
                // the attribute reset already closed the span
                _ => active = None,
            }
        } else {
            out.push(ch);
        }
    }

    if active.is_some() {
        out.push_str(&reset);
    }
    if cursor.is_some_and(|col| col >= chars.len()) {
        out.push_str(&reverse);
        out.push(' ');
        out.push_str(&reset);
    }
    out
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
