//! Viewport management
//! Tracks which rows of the buffer fit between the title and the status line

//! ## viewport/ Invariants
//!
//! - The viewport never mutates buffer contents.
//! - After `update`, the cursor row lies inside `top_line..top_line + rows`.
//! - The viewport never scrolls past the last buffer line while rows remain
//!   empty above it.
//! - A zero-row viewport still reports the cursor row as visible.

use std::ops::Range;

/// Vertical window into the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible buffer row (0-indexed)
    top_line: usize,
    /// Number of content rows available
    visible_rows: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(usize::MAX)
    }
}

impl Viewport {
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Viewport {
            top_line: 0,
            visible_rows: rows,
        }
    }

    /// Scroll so that `cursor_row` is visible.
    /// Returns true if the top line changed.
    pub fn update(&mut self, cursor_row: usize, total_lines: usize) -> bool {
        let prev = self.top_line;
        let rows = self.visible_rows.max(1);

        if cursor_row < self.top_line {
            self.top_line = cursor_row;
        } else if cursor_row >= self.top_line.saturating_add(rows) {
            self.top_line = cursor_row + 1 - rows;
        }

        // Pull back when lines were removed below the window
        let max_top = total_lines.saturating_sub(rows);
        if self.top_line > max_top {
            self.top_line = max_top.min(cursor_row);
        }

        self.top_line != prev
    }

    #[must_use]
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn set_visible_rows(&mut self, rows: usize) {
        self.visible_rows = rows;
    }

    /// Buffer rows to draw, clamped to `total_lines`
    #[must_use]
    pub fn range(&self, total_lines: usize) -> Range<usize> {
        let start = self.top_line.min(total_lines);
        let end = start.saturating_add(self.visible_rows.max(1)).min(total_lines);
        start..end
    }
}
