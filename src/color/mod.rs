//! Color system
//! Color types and the SGR escape codes used by the renderer and highlighter

use crossterm::style::{
    Color as CrosstermColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};

pub use crossterm::style::Attribute;

/// Terminal color
/// Supports 16 colors, 256 colors, and RGB colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Reset to default color
    Reset,
    /// Standard 16 colors
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
    /// 256-color palette (0-255)
    Ansi256(u8),
    /// RGB color (r, g, b) where each component is 0-255
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    #[must_use]
    pub fn to_crossterm(self) -> CrosstermColor {
        match self {
            Color::Reset => CrosstermColor::Reset,
            Color::Black => CrosstermColor::Black,
            Color::DarkGrey => CrosstermColor::DarkGrey,
            Color::Red => CrosstermColor::Red,
            Color::DarkRed => CrosstermColor::DarkRed,
            Color::Green => CrosstermColor::Green,
            Color::DarkGreen => CrosstermColor::DarkGreen,
            Color::Yellow => CrosstermColor::Yellow,
            Color::DarkYellow => CrosstermColor::DarkYellow,
            Color::Blue => CrosstermColor::Blue,
            Color::DarkBlue => CrosstermColor::DarkBlue,
            Color::Magenta => CrosstermColor::Magenta,
            Color::DarkMagenta => CrosstermColor::DarkMagenta,
            Color::Cyan => CrosstermColor::Cyan,
            Color::DarkCyan => CrosstermColor::DarkCyan,
            Color::White => CrosstermColor::White,
            Color::Grey => CrosstermColor::Grey,
            Color::Ansi256(n) => CrosstermColor::AnsiValue(n),
            Color::Rgb { r, g, b } => CrosstermColor::Rgb { r, g, b },
        }
    }

    /// SGR sequence selecting this color as the foreground
    #[must_use]
    pub fn fg(self) -> String {
        SetForegroundColor(self.to_crossterm()).to_string()
    }

    /// SGR sequence selecting this color as the background
    #[must_use]
    pub fn bg(self) -> String {
        SetBackgroundColor(self.to_crossterm()).to_string()
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional)
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return None,
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        Some(Color::Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// `#rrggbb` form of an RGB color; `None` for palette colors
    #[must_use]
    pub fn to_hex(self) -> Option<String> {
        match self {
            Color::Rgb { r, g, b } => Some(format!("#{r:02x}{g:02x}{b:02x}")),
            _ => None,
        }
    }
}

/// Sequence that clears colors and every attribute
#[must_use]
pub fn reset() -> String {
    SetAttribute(Attribute::Reset).to_string()
}

/// SGR sequence turning on a single text attribute (bold, italic, reverse...)
#[must_use]
pub fn attribute(attr: Attribute) -> String {
    SetAttribute(attr).to_string()
}

/// Wrap `text` in the foreground color and a trailing reset
#[must_use]
pub fn wrap(color: Color, text: &str) -> String {
    format!("{}{text}{}", color.fg(), reset())
}

/// Wrap `text` in the background color and a trailing reset
#[must_use]
pub fn wrap_bg(color: Color, text: &str) -> String {
    format!("{}{text}{}", color.bg(), reset())
}

/// Apply any mix of attributes to `text`, then reset.
/// With no attributes the text is returned unchanged.
#[must_use]
pub fn style(text: &str, attrs: &[Attribute]) -> String {
    if attrs.is_empty() {
        return text.to_string();
    }
    let mut out: String = attrs.iter().map(|&a| attribute(a)).collect();
    out.push_str(text);
    out.push_str(&reset());
    out
}

/// Color output that can be switched off for plain terminals.
///
/// A disabled painter returns text unchanged and empty escape strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub const fn enabled(self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn fg(self, color: Color) -> String {
        if self.enabled {
            color.fg()
        } else {
            String::new()
        }
    }

    #[must_use]
    pub fn reset(self) -> String {
        if self.enabled {
            reset()
        } else {
            String::new()
        }
    }

    #[must_use]
    pub fn wrap(self, color: Color, text: &str) -> String {
        if self.enabled {
            wrap(color, text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new(true)
    }
}
