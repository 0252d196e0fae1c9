//! Text buffer
//! Line-oriented storage for the text area plus its cursor

/// ## buffer/ Invariants
///
/// - The buffer always contains at least one line.
/// - Lines hold `char`s; line breaks are structural and never stored.
/// - `cursor.row < line_count()` and `cursor.col <= line_len(cursor.row)`.
/// - Every operation that shortens a line or removes rows re-clamps the cursor.
/// - Movement never mutates text; edits report whether they changed anything.
use std::fmt;

/// Cursor position (row, column), both 0-indexed, column in chars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Editable lines and the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<Vec<char>>,
    cursor: Cursor,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// A buffer holding one empty line
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            cursor: Cursor::default(),
        }
    }

    /// Build from existing lines; the cursor starts at (0, 0).
    /// Embedded `\n` characters split into separate lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collected: Vec<Vec<char>> = lines
            .into_iter()
            .flat_map(|l| {
                l.as_ref()
                    .split('\n')
                    .map(|part| part.trim_end_matches('\r').chars().collect())
                    .collect::<Vec<Vec<char>>>()
            })
            .collect();
        if collected.is_empty() {
            collected.push(Vec::new());
        }
        Self {
            lines: collected,
            cursor: Cursor::default(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[Vec<char>] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, row: usize) -> Option<&[char]> {
        self.lines.get(row).map(Vec::as_slice)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length in chars of `row` (0 if the row does not exist)
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor, clamping it into the buffer
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.clamp_cursor();
    }

    /// The lines as owned strings, top to bottom
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.iter().collect()).collect()
    }

    /// Whether the buffer is a single empty line
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn clamp_cursor(&mut self) {
        let last_row = self.lines.len() - 1;
        self.cursor.row = self.cursor.row.min(last_row);
        self.cursor.col = self.cursor.col.min(self.lines[self.cursor.row].len());
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert `ch` at the cursor and advance one column
    pub fn insert_char(&mut self, ch: char) {
        if self.cursor.row >= self.lines.len() {
            self.lines.push(Vec::new());
            self.cursor.row = self.lines.len() - 1;
        }
        let line = &mut self.lines[self.cursor.row];
        let col = self.cursor.col.min(line.len());
        line.insert(col, ch);
        self.cursor.col = col + 1;
    }

    /// Insert each char of `text`; `\n` splits lines
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.insert_newline();
            } else {
                self.insert_char(ch);
            }
        }
    }

    /// Split the current line at the cursor; the cursor moves to the start
    /// of the new line.
    pub fn insert_newline(&mut self) {
        self.clamp_cursor();
        let Cursor { row, col } = self.cursor;
        let right = self.lines[row].split_off(col);
        self.lines.insert(row + 1, right);
        self.cursor = Cursor::new(row + 1, 0);
    }

    /// Delete the char left of the cursor, joining with the previous line at
    /// column 0. Returns false at (0, 0).
    pub fn backspace(&mut self) -> bool {
        self.clamp_cursor();
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            self.lines[row].remove(col - 1);
            self.cursor.col = col - 1;
            true
        } else if row > 0 {
            let current = self.lines.remove(row);
            let prev = &mut self.lines[row - 1];
            let joint = prev.len();
            prev.extend(current);
            self.cursor = Cursor::new(row - 1, joint);
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Left one char; at column 0 wraps to the end of the previous line
    pub fn move_left(&mut self) -> bool {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
            true
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.line_len(self.cursor.row);
            true
        } else {
            false
        }
    }

    /// Right one char; at end of line wraps to the start of the next line
    pub fn move_right(&mut self) -> bool {
        if self.cursor.col < self.line_len(self.cursor.row) {
            self.cursor.col += 1;
            true
        } else if self.cursor.row + 1 < self.lines.len() {
            self.cursor = Cursor::new(self.cursor.row + 1, 0);
            true
        } else {
            false
        }
    }

    pub fn move_up(&mut self) -> bool {
        self.move_rows_up(1)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_rows_down(1)
    }

    /// Up `n` rows (clamped to the first row), snapping the column
    pub fn move_rows_up(&mut self, n: usize) -> bool {
        if self.cursor.row == 0 || n == 0 {
            return false;
        }
        self.cursor.row = self.cursor.row.saturating_sub(n);
        self.snap_column();
        true
    }

    /// Down `n` rows (clamped to the last row), snapping the column
    pub fn move_rows_down(&mut self, n: usize) -> bool {
        let last_row = self.lines.len() - 1;
        if self.cursor.row >= last_row || n == 0 {
            return false;
        }
        self.cursor.row = self.cursor.row.saturating_add(n).min(last_row);
        self.snap_column();
        true
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.cursor.col != 0;
        self.cursor.col = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let end = self.line_len(self.cursor.row);
        let moved = self.cursor.col != end;
        self.cursor.col = end;
        moved
    }

    fn snap_column(&mut self) {
        self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.row));
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for ch in line {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
