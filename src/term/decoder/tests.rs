//! Tests for the raw input decoder

use super::*;
use crate::error::ErrorType;

fn one(bytes: &[u8]) -> KeyEvent {
    let mut source = ReadSource::new(bytes);
    read_event(&mut source).expect("event")
}

#[test]
fn test_printable_ascii() {
    assert_eq!(one(b"a"), KeyEvent::rune('a', 1));
    assert_eq!(one(b"Z"), KeyEvent::rune('Z', 1));
    assert_eq!(one(b"~"), KeyEvent::rune('~', 1));
}

#[test]
fn test_single_byte_keys() {
    assert_eq!(one(&[0x7f]).code, KeyCode::Backspace);
    assert_eq!(one(b"\t").code, KeyCode::Tab);
    assert_eq!(one(b"\r").code, KeyCode::Enter);
    assert_eq!(one(b"\n").code, KeyCode::Enter);
    assert_eq!(one(b" ").code, KeyCode::Space);
}

#[test]
fn test_control_bytes_map_to_ctrl_letters() {
    assert!(one(&[0x01]).is_ctrl('a'));
    assert!(one(&[0x03]).is_ctrl('c'));
    assert!(one(&[0x04]).is_ctrl('d'));
    assert!(one(&[0x08]).is_ctrl('h'));
    assert!(one(&[0x1a]).is_ctrl('z'));
}

#[test]
fn test_unknown_bytes() {
    assert_eq!(one(&[0x00]).code, KeyCode::Unknown);
    assert_eq!(one(&[0x1c]).code, KeyCode::Unknown);
    assert_eq!(one(&[0x80]).code, KeyCode::Unknown);
    assert_eq!(one(&[0xff]).code, KeyCode::Unknown);
}

#[test]
fn test_lone_escape_at_end_of_input() {
    assert_eq!(one(&[0x1b]), KeyEvent::new(KeyCode::Escape));
}

#[test]
fn test_alt_combination() {
    let ev = one(b"\x1bx");
    assert!(ev.is_alt('x'));
    assert!(!ev.is_ctrl('x'));
}

#[test]
fn test_arrow_keys() {
    assert_eq!(one(b"\x1b[A").code, KeyCode::Up);
    assert_eq!(one(b"\x1b[B").code, KeyCode::Down);
    assert_eq!(one(b"\x1b[C").code, KeyCode::Right);
    assert_eq!(one(b"\x1b[D").code, KeyCode::Left);
    // application cursor mode
    assert_eq!(one(b"\x1bOA").code, KeyCode::Up);
}

#[test]
fn test_home_end() {
    assert_eq!(one(b"\x1b[H").code, KeyCode::Home);
    assert_eq!(one(b"\x1b[F").code, KeyCode::End);
    assert_eq!(one(b"\x1b[1~").code, KeyCode::Home);
    assert_eq!(one(b"\x1b[4~").code, KeyCode::End);
}

#[test]
fn test_page_keys() {
    assert_eq!(one(b"\x1b[5~").code, KeyCode::PageUp);
    assert_eq!(one(b"\x1b[6~").code, KeyCode::PageDown);
}

#[test]
fn test_function_keys() {
    assert_eq!(one(b"\x1bOP").code, KeyCode::F(1));
    assert_eq!(one(b"\x1bOQ").code, KeyCode::F(2));
    assert_eq!(one(b"\x1bOR").code, KeyCode::F(3));
    assert_eq!(one(b"\x1bOS").code, KeyCode::F(4));

    let table: [(&[u8], u8); 8] = [
        (b"\x1b[15~", 5),
        (b"\x1b[17~", 6),
        (b"\x1b[18~", 7),
        (b"\x1b[19~", 8),
        (b"\x1b[20~", 9),
        (b"\x1b[21~", 10),
        (b"\x1b[23~", 11),
        (b"\x1b[24~", 12),
    ];
    for (bytes, n) in table {
        assert_eq!(one(bytes).code, KeyCode::F(n), "sequence {bytes:?}");
    }
}

#[test]
fn test_modified_cursor_keys() {
    let ev = one(b"\x1b[1;5C");
    assert_eq!(ev.code, KeyCode::Right);
    assert_eq!(ev.modifiers, Modifiers::CTRL);

    let ev = one(b"\x1b[1;2A");
    assert_eq!(ev.code, KeyCode::Up);
    assert_eq!(ev.modifiers, Modifiers::SHIFT);

    let ev = one(b"\x1b[5;3~");
    assert_eq!(ev.code, KeyCode::PageUp);
    assert_eq!(ev.modifiers, Modifiers::ALT);
}

#[test]
fn test_unrecognised_sequences_are_unknown() {
    assert_eq!(one(b"\x1b[Z").code, KeyCode::Unknown);
    assert_eq!(one(b"\x1b[99~").code, KeyCode::Unknown);
    assert_eq!(one(b"\x1bOx").code, KeyCode::Unknown);
    // truncated sequences
    assert_eq!(one(b"\x1b[").code, KeyCode::Unknown);
    assert_eq!(one(b"\x1b[1").code, KeyCode::Unknown);
}

#[test]
fn test_utf8_runes() {
    let ev = one("é".as_bytes());
    assert_eq!(ev, KeyEvent::rune('é', 1));

    let ev = one("世".as_bytes());
    assert_eq!(ev, KeyEvent::rune('世', 2));

    let ev = one("🦀".as_bytes());
    assert_eq!(ev.code, KeyCode::Rune('🦀'));
    assert_eq!(ev.width, 2);
}

#[test]
fn test_invalid_utf8_is_unknown() {
    assert_eq!(one(&[0xc3, 0x28]).code, KeyCode::Unknown);
    assert_eq!(one(&[0xe4, 0xb8]).code, KeyCode::Unknown);
    assert_eq!(one(&[0xed, 0xa0, 0x80]).code, KeyCode::Unknown);
}

#[test]
fn test_read_error_is_propagated() {
    let mut source = ReadSource::new(&b""[..]);
    let err = read_event(&mut source).unwrap_err();
    assert_eq!(err.kind, ErrorType::Io);
}

#[test]
fn test_decode_all_stream() {
    let events = decode_all(b"hi\x1b[Dx\r\x04");
    assert_eq!(
        events,
        vec![
            KeyEvent::rune('h', 1),
            KeyEvent::rune('i', 1),
            KeyEvent::new(KeyCode::Left),
            KeyEvent::rune('x', 1),
            KeyEvent::new(KeyCode::Enter),
            KeyEvent::ctrl('d'),
        ]
    );
}

#[test]
fn test_double_escape_is_escape_key() {
    assert_eq!(decode_all(b"\x1b\x1bq"), vec![KeyEvent::new(KeyCode::Escape), KeyEvent::rune('q', 1)]);
}

#[test]
fn test_escape_then_control_key_keeps_ctrl() {
    let ev = one(b"\x1b\x04");
    assert!(ev.is_ctrl('d'));
    assert_eq!(ev.modifiers, Modifiers::CTRL | Modifiers::ALT);
    assert!(one(b"\x1b\x03").is_ctrl('c'));
    // Enter after Escape stays an Alt combination of the raw byte
    assert_eq!(one(b"\x1b\r"), KeyEvent::alt('\r'));
}

#[test]
fn test_broken_utf8_keeps_following_key() {
    assert_eq!(decode_all(b"\xc3A"), vec![KeyEvent::unknown(), KeyEvent::rune('A', 1)]);
    assert_eq!(
        decode_all(b"\xe4\xb8\x1b[A"),
        vec![KeyEvent::unknown(), KeyEvent::new(KeyCode::Up)]
    );
}

#[test]
fn test_unread_is_read_back_first() {
    let mut source = ReadSource::new(&b"b"[..]);
    source.unread(b'a');
    assert_eq!(source.read_byte().unwrap(), b'a');
    assert_eq!(source.read_byte().unwrap(), b'b');
}
