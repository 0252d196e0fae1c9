//! Global constants for termpad

pub mod ui {
    /// Glyph drawn between the gutter and the line content
    pub const BORDER: char = '│';

    /// Help text shown on the status line
    pub const HELP: &str =
        "Ctrl-D finish • Ctrl-C cancel • Ctrl-Z/Ctrl-Y undo/redo • Ctrl-F search";

    /// Prompt shown in front of the search term
    pub const SEARCH_PROMPT: &str = "Search: ";

    /// Minimum width of the line-number gutter
    pub const MIN_GUTTER_WIDTH: usize = 3;
}

pub mod keys {
    /// Escape byte that introduces every control sequence
    pub const ESC: u8 = 0x1b;
    /// DEL, sent by most terminals for the backspace key
    pub const DEL: u8 = 0x7f;
    pub const TAB: u8 = 0x09;
    pub const LF: u8 = 0x0a;
    pub const CR: u8 = 0x0d;
    pub const SPACE: u8 = 0x20;
    /// Offset from a control byte (0x01..=0x1a) back to its letter
    pub const CTRL_OFFSET: u8 = 96;
    /// Upper bound on the digits of a numeric CSI sequence
    pub const MAX_CSI_PARAMS: usize = 8;
}

pub mod defaults {
    pub const TITLE: &str = "termpad";
    pub const TAB_WIDTH: usize = 4;
    pub const PAGE_SIZE: usize = 10;
    /// Number of undo snapshots kept before the oldest is dropped
    pub const HISTORY_LIMIT: usize = 1000;
}

pub mod errors {
    // Error Codes
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const INTERRUPTED: &str = "INTERRUPTED";
    pub const RAW_MODE_FAILED: &str = "RAW_MODE_FAILED";
    pub const SIZE_FAILED: &str = "SIZE_FAILED";
    pub const NOT_A_TERMINAL: &str = "NOT_A_TERMINAL";
    pub const WRITE_FAILED: &str = "WRITE_FAILED";
    pub const REGEX_COMPILE_ERROR: &str = "REGEX_COMPILE_ERROR";
    pub const UNKNOWN_LANGUAGE: &str = "UNKNOWN_LANGUAGE";

    // Error Messages
    pub const MSG_INTERRUPTED: &str = "interrupted";
}

pub mod history {
    pub const ALREADY_OLDEST: &str = "Already at oldest change";
    pub const ALREADY_NEWEST: &str = "Already at newest change";
}

pub mod search {
    pub const NOT_FOUND: &str = "Pattern not found";
    pub const NO_PREVIOUS: &str = "No previous search";
}

pub mod modes {
    pub const INSERT: &str = "INSERT";
    pub const SEARCH: &str = "SEARCH";
}
