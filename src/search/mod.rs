//! Search functionality
//!
//! Case-sensitive substring search over the buffer lines.
//! Positions are (row, column) in chars. Forward search wraps around
//! to the top of the buffer.

use crate::buffer::Cursor;

/// Find the first occurrence of `term` scanning from `start_row` to the
/// last line, then wrapping from line 0 up to (not including) `start_row`.
#[must_use]
pub fn find(lines: &[Vec<char>], start_row: usize, term: &str) -> Option<Cursor> {
    let pattern: Vec<char> = term.chars().collect();
    if pattern.is_empty() || lines.is_empty() {
        return None;
    }
    let start_row = start_row.min(lines.len() - 1);

    (start_row..lines.len())
        .chain(0..start_row)
        .find_map(|row| find_in_line(&lines[row], &pattern, 0).map(|col| Cursor::new(row, col)))
}

/// Find the next occurrence strictly after `from`, wrapping around the
/// buffer. Returns the match at `from` itself only when it is the sole one.
#[must_use]
pub fn find_after(lines: &[Vec<char>], from: Cursor, term: &str) -> Option<Cursor> {
    let pattern: Vec<char> = term.chars().collect();
    if pattern.is_empty() || lines.is_empty() {
        return None;
    }
    let row = from.row.min(lines.len() - 1);

    // 1. Rest of the current line
    if let Some(col) = find_in_line(&lines[row], &pattern, from.col + 1) {
        return Some(Cursor::new(row, col));
    }

    // 2. Following lines, then wrap around to the top
    for r in (row + 1..lines.len()).chain(0..row) {
        if let Some(col) = find_in_line(&lines[r], &pattern, 0) {
            return Some(Cursor::new(r, col));
        }
    }

    // 3. Head of the current line (including the starting position)
    find_in_line(&lines[row], &pattern, 0)
        .filter(|&col| col <= from.col)
        .map(|col| Cursor::new(row, col))
}

/// Column of the first match of `pattern` in `line` at or after `from`
fn find_in_line(line: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if from > line.len() || pattern.len() > line.len() - from {
        return None;
    }
    line[from..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|offset| from + offset)
}
