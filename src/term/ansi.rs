//! ANSI escape sequences for terminal control
//! The renderer builds whole frames out of these before a single write

/// Control Sequence Introducer
pub const CSI: &str = "\x1b[";

/// Screen
pub const CLEAR_SCREEN: &str = "\x1b[2J";
pub const CLEAR_SCREEN_DOWN: &str = "\x1b[0J";
pub const CLEAR_SCREEN_UP: &str = "\x1b[1J";

/// Lines
pub const CLEAR_LINE: &str = "\x1b[2K";
pub const CLEAR_TO_EOL: &str = "\x1b[K";
pub const CLEAR_TO_BOL: &str = "\x1b[1K";
pub const INSERT_LINE: &str = "\x1b[L";
pub const DELETE_LINE: &str = "\x1b[M";

/// Cursor
pub const RESET_CURSOR: &str = "\x1b[H";
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";
pub const SAVE_CURSOR: &str = "\x1b7";
pub const RESTORE_CURSOR: &str = "\x1b8";

/// Scrolling and wrapping
pub const SCROLL_UP: &str = "\x1b[S";
pub const SCROLL_DOWN: &str = "\x1b[T";
pub const ENABLE_WRAP: &str = "\x1b[?7h";
pub const DISABLE_WRAP: &str = "\x1b[?7l";

/// Line terminator while the terminal is in raw mode
pub const NEWLINE: &str = "\r\n";

/// Format cursor position escape sequence (0-indexed input)
#[must_use]
pub fn format_cursor_position(row: u16, col: u16) -> String {
    format!("\x1b[{};{}H", u32::from(row) + 1, u32::from(col) + 1)
}

/// Move to a 0-indexed column in the current row
#[must_use]
pub fn move_to_column(col: u16) -> String {
    format!("\x1b[{}G", u32::from(col) + 1)
}

/// Relative cursor movement; `n == 0` yields an empty string since terminals
/// treat a zero count as one.
#[must_use]
pub fn move_up(n: u16) -> String {
    relative(n, 'A')
}

#[must_use]
pub fn move_down(n: u16) -> String {
    relative(n, 'B')
}

#[must_use]
pub fn move_right(n: u16) -> String {
    relative(n, 'C')
}

#[must_use]
pub fn move_left(n: u16) -> String {
    relative(n, 'D')
}

fn relative(n: u16, dir: char) -> String {
    if n == 0 {
        String::new()
    } else {
        format!("{CSI}{n}{dir}")
    }
}

/// Full clear followed by a jump to the top-left corner
pub fn write_clear_screen(out: &mut String) {
    out.push_str(CLEAR_SCREEN);
    out.push_str(RESET_CURSOR);
}

pub fn write_move_cursor(out: &mut String, row: u16, col: u16) {
    out.push_str(&format_cursor_position(row, col));
}
