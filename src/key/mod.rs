//! Key representation for text area input

use std::fmt;

use bitflags::bitflags;

/// Which key was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Printable character (also the letter of a Ctrl/Alt combination)
    Rune(char),
    Escape,
    Enter,
    Backspace,
    Tab,
    Space,
    /// Arrow keys
    Up,
    Down,
    Left,
    Right,
    /// Navigation keys
    Home,
    End,
    PageUp,
    PageDown,
    /// Function keys F1..=F12
    F(u8),
    /// Bytes that did not decode to any known key
    Unknown,
}

bitflags! {
    /// Modifier keys held with a key press
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1;
        const ALT = 1 << 1;
        const CTRL = 1 << 2;
    }
}

/// Represents a decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    /// Display width of a rune in cells (0 for non-rune keys)
    pub width: u8,
}

impl KeyEvent {
    /// A key with no modifiers
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            width: 0,
        }
    }

    #[must_use]
    pub const fn with_modifiers(code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            code,
            modifiers,
            width: 0,
        }
    }

    /// A plain printable character occupying `width` cells
    #[must_use]
    pub const fn rune(ch: char, width: u8) -> Self {
        Self {
            code: KeyCode::Rune(ch),
            modifiers: Modifiers::empty(),
            width,
        }
    }

    #[must_use]
    pub const fn ctrl(ch: char) -> Self {
        Self::with_modifiers(KeyCode::Rune(ch), Modifiers::CTRL)
    }

    #[must_use]
    pub const fn alt(ch: char) -> Self {
        Self::with_modifiers(KeyCode::Rune(ch), Modifiers::ALT)
    }

    #[must_use]
    pub const fn unknown() -> Self {
        Self::new(KeyCode::Unknown)
    }

    /// Ctrl+`ch`
    #[must_use]
    pub fn is_ctrl(&self, ch: char) -> bool {
        self.code == KeyCode::Rune(ch) && self.modifiers.contains(Modifiers::CTRL)
    }

    /// Alt+`ch`
    #[must_use]
    pub fn is_alt(&self, ch: char) -> bool {
        self.code == KeyCode::Rune(ch) && self.modifiers.contains(Modifiers::ALT)
    }

    /// Shift+`ch`
    #[must_use]
    pub fn is_shift(&self, ch: char) -> bool {
        self.code == KeyCode::Rune(ch) && self.modifiers.contains(Modifiers::SHIFT)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(Modifiers::CTRL) {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.contains(Modifiers::ALT) {
            f.write_str("Alt+")?;
        }
        if self.modifiers.contains(Modifiers::SHIFT) {
            f.write_str("Shift+")?;
        }

        match self.code {
            KeyCode::Rune(ch) => write!(f, "{ch}"),
            KeyCode::Escape => f.write_str("Escape"),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Backspace => f.write_str("Backspace"),
            KeyCode::Tab => f.write_str("Tab"),
            KeyCode::Space => f.write_str("Space"),
            KeyCode::Up => f.write_str("Up"),
            KeyCode::Down => f.write_str("Down"),
            KeyCode::Left => f.write_str("Left"),
            KeyCode::Right => f.write_str("Right"),
            KeyCode::Home => f.write_str("Home"),
            KeyCode::End => f.write_str("End"),
            KeyCode::PageUp => f.write_str("PgUp"),
            KeyCode::PageDown => f.write_str("PgDown"),
            KeyCode::F(n) => write!(f, "F{n}"),
            KeyCode::Unknown => f.write_str("Unknown"),
        }
    }
}
