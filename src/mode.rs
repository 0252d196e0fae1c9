//! Text area mode definitions

use crate::constants::modes;

/// Widget operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Text editing
    #[default]
    Insert,
    /// Typing a search term (entered with Ctrl-F)
    Search,
}

impl Mode {
    /// Name shown on the status line
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Mode::Insert => modes::INSERT,
            Mode::Search => modes::SEARCH,
        }
    }
}
