//! Raw input decoding
//!
//! Turns the byte stream of a terminal in raw mode into `KeyEvent`s.
//! Exactly one event is produced per call; reads block on the source.
//!
//! Malformed or unsupported sequences decode to `KeyCode::Unknown` and never
//! raise an error. Only a failed read of the first byte of an event is
//! reported to the caller.

use std::io::{self, Read};

use unicode_width::UnicodeWidthChar;

use crate::constants::keys::{CR, CTRL_OFFSET, DEL, ESC, LF, MAX_CSI_PARAMS, SPACE, TAB};
use crate::error::Result;
use crate::key::{KeyCode, KeyEvent, Modifiers};

/// A blocking source of single bytes
pub trait ByteSource {
    fn read_byte(&mut self) -> io::Result<u8>;

    /// Push `byte` back so the next `read_byte` returns it.
    /// At most one byte is pushed back between reads.
    fn unread(&mut self, byte: u8);
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<u8> {
        (**self).read_byte()
    }

    fn unread(&mut self, byte: u8) {
        (**self).unread(byte);
    }
}

/// Adapts any `io::Read` into a `ByteSource`.
/// End of input is reported as `UnexpectedEof`.
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    pending: Option<u8>,
}

impl<R: Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: None,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn read_byte(&mut self) -> io::Result<u8> {
        if let Some(b) = self.pending.take() {
            return Ok(b);
        }
        let mut buf = [0u8; 1];
        self.inner.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn unread(&mut self, byte: u8) {
        self.pending = Some(byte);
    }
}

/// Read and decode a single key press.
pub fn read_event<S: ByteSource + ?Sized>(source: &mut S) -> Result<KeyEvent> {
    let first = source.read_byte()?;
    let event = decode(first, source);
    if event.code == KeyCode::Unknown {
        tracing::warn!(byte = first, "ignoring malformed input");
    } else {
        tracing::debug!(key = %event, "decoded key");
    }
    Ok(event)
}

/// Decode every event in `bytes` until the input runs out.
#[must_use]
pub fn decode_all(bytes: &[u8]) -> Vec<KeyEvent> {
    let mut source = ReadSource::new(bytes);
    let mut events = Vec::new();
    while let Ok(event) = read_event(&mut source) {
        events.push(event);
    }
    events
}

fn decode<S: ByteSource + ?Sized>(first: u8, source: &mut S) -> KeyEvent {
    match first {
        ESC => decode_escape(source),
        DEL => KeyEvent::new(KeyCode::Backspace),
        TAB => KeyEvent::new(KeyCode::Tab),
        CR | LF => KeyEvent::new(KeyCode::Enter),
        SPACE => KeyEvent::new(KeyCode::Space),
        0x01..=0x1a => KeyEvent::ctrl(char::from(first + CTRL_OFFSET)),
        0x21..=0x7e => KeyEvent::rune(char::from(first), 1),
        0xc2..=0xf4 => match decode_utf8(first, source) {
            Utf8Rune::Valid(event) => event,
            Utf8Rune::Invalid(next) => {
                if let Some(b) = next {
                    source.unread(b);
                }
                KeyEvent::unknown()
            }
        },
        _ => KeyEvent::unknown(),
    }
}

fn decode_escape<S: ByteSource + ?Sized>(source: &mut S) -> KeyEvent {
    let Ok(next) = source.read_byte() else {
        return KeyEvent::new(KeyCode::Escape);
    };

    match next {
        b'[' => decode_csi(source),
        b'O' => decode_ss3(source),
        // Escape pressed twice
        ESC => KeyEvent::new(KeyCode::Escape),
        // Escape then a control key: the Ctrl meaning survives so Ctrl+C and
        // Ctrl+D still work right after Escape
        0x01..=0x1a if !matches!(next, TAB | LF | CR) => KeyEvent::with_modifiers(
            KeyCode::Rune(char::from(next + CTRL_OFFSET)),
            Modifiers::CTRL | Modifiers::ALT,
        ),
        // ESC + key
        _ if next.is_ascii() => KeyEvent::alt(char::from(next)),
        _ => KeyEvent::unknown(),
    }
}

fn decode_ss3<S: ByteSource + ?Sized>(source: &mut S) -> KeyEvent {
    match source.read_byte() {
        Ok(b) => final_key(b).map_or_else(KeyEvent::unknown, KeyEvent::new),
        Err(_) => KeyEvent::unknown(),
    }
}

fn decode_csi<S: ByteSource + ?Sized>(source: &mut S) -> KeyEvent {
    let Ok(b) = source.read_byte() else {
        return KeyEvent::unknown();
    };

    if b.is_ascii_digit() {
        return decode_numeric_csi(b, source);
    }

    match b {
        b'A' | b'B' | b'C' | b'D' | b'H' | b'F' => {
            final_key(b).map_or_else(KeyEvent::unknown, KeyEvent::new)
        }
        _ => KeyEvent::unknown(),
    }
}

/// `ESC [ <params> <final>` where params are digits separated by `;`.
fn decode_numeric_csi<S: ByteSource + ?Sized>(first_digit: u8, source: &mut S) -> KeyEvent {
    let mut params = vec![first_digit];
    let final_byte = loop {
        let Ok(b) = source.read_byte() else {
            return KeyEvent::unknown();
        };
        if b.is_ascii_digit() || b == b';' {
            if params.len() >= MAX_CSI_PARAMS {
                return KeyEvent::unknown();
            }
            params.push(b);
        } else {
            break b;
        }
    };

    let params = String::from_utf8_lossy(&params);
    let mut fields = params.split(';').map(|p| p.parse::<u16>().ok());
    let number = fields.next().flatten();
    let modifiers = match fields.next() {
        Some(Some(m)) => modifier_param(m),
        Some(None) => return KeyEvent::unknown(),
        None => Modifiers::empty(),
    };

    let code = match (final_byte, number) {
        (b'~', Some(n)) => tilde_key(n),
        // `ESC [ 1 ; <m> <final>` carries modifiers for cursor and F1-F4 keys
        (_, Some(1)) => final_key(final_byte),
        _ => None,
    };

    code.map_or_else(KeyEvent::unknown, |code| {
        KeyEvent::with_modifiers(code, modifiers)
    })
}

/// xterm encodes modifiers as `1 + bitmask` with Shift=1, Alt=2, Ctrl=4.
fn modifier_param(m: u16) -> Modifiers {
    let bits = m.saturating_sub(1);
    Modifiers::from_bits_truncate(u8::try_from(bits).unwrap_or(0))
}

fn final_key(b: u8) -> Option<KeyCode> {
    let code = match b {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        b'P' => KeyCode::F(1),
        b'Q' => KeyCode::F(2),
        b'R' => KeyCode::F(3),
        b'S' => KeyCode::F(4),
        _ => return None,
    };
    Some(code)
}

fn tilde_key(n: u16) -> Option<KeyCode> {
    let code = match n {
        1 | 7 => KeyCode::Home,
        4 | 8 => KeyCode::End,
        5 => KeyCode::PageUp,
        6 => KeyCode::PageDown,
        15 => KeyCode::F(5),
        17 => KeyCode::F(6),
        18 => KeyCode::F(7),
        19 => KeyCode::F(8),
        20 => KeyCode::F(9),
        21 => KeyCode::F(10),
        23 => KeyCode::F(11),
        24 => KeyCode::F(12),
        _ => return None,
    };
    Some(code)
}

fn decode_utf8<S: ByteSource + ?Sized>(lead: u8, source: &mut S) -> Utf8Rune {
    let len = match lead {
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    };

    let mut buf = [lead, 0, 0, 0];
    for i in 1..len {
        let Ok(b) = source.read_byte() else {
            return Utf8Rune::Invalid(None);
        };
        if !is_continuation(b) {
            // the byte starts the next key; hand it back to the caller
            return Utf8Rune::Invalid(Some(b));
        }
        buf[i] = b;
    }

    match std::str::from_utf8(&buf[..len]).ok().and_then(|s| s.chars().next()) {
        Some(ch) => Utf8Rune::Valid(KeyEvent::rune(ch, rune_width(ch))),
        None => Utf8Rune::Invalid(None),
    }
}

/// Outcome of reading a multi-byte sequence
enum Utf8Rune {
    Valid(KeyEvent),
    /// Malformed; carries the non-continuation byte that ended it, if any
    Invalid(Option<u8>),
}

fn is_continuation(b: u8) -> bool {
    (0x80..=0xbf).contains(&b)
}

/// Cells a rune occupies: 2 for wide (CJK, emoji) characters, 1 otherwise.
fn rune_width(ch: char) -> u8 {
    match ch.width() {
        Some(w) if w >= 2 => 2,
        _ => 1,
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
