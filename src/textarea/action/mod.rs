//! Key bindings
//! Translates decoded keys into text area actions for the current mode

use crate::key::{KeyCode, KeyEvent, Modifiers};
use crate::mode::Mode;

/// Something the text area can do in response to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Session
    Finish,
    Interrupt,

    // Editing
    Insert(char),
    InsertTab,
    Newline,
    Backspace,

    // Movement
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    // History
    Undo,
    Redo,

    // Search
    StartSearch,
    SearchNext,
    SearchInput(char),
    SearchBackspace,
    SearchSubmit,
    SearchCancel,
}

impl Action {
    /// The action bound to `event` in `mode`, if any
    #[must_use]
    pub fn from_key(event: KeyEvent, mode: Mode) -> Option<Action> {
        let ctrl = event.modifiers.contains(Modifiers::CTRL);
        if ctrl {
            match event.code {
                KeyCode::Rune('c') => return Some(Action::Interrupt),
                KeyCode::Rune('d') => return Some(Action::Finish),
                _ => {}
            }
        }
        if event.modifiers.contains(Modifiers::ALT) {
            // A single Escape press reaches us as Escape + the next key
            return (mode == Mode::Search).then_some(Action::SearchCancel);
        }

        match mode {
            Mode::Insert => Self::insert_binding(event, ctrl),
            Mode::Search => Self::search_binding(event, ctrl),
        }
    }

    fn insert_binding(event: KeyEvent, ctrl: bool) -> Option<Action> {
        if ctrl {
            return match event.code {
                KeyCode::Rune('z') => Some(Action::Undo),
                KeyCode::Rune('y') => Some(Action::Redo),
                KeyCode::Rune('f') => Some(Action::StartSearch),
                KeyCode::Rune('n') => Some(Action::SearchNext),
                KeyCode::Rune('h') => Some(Action::Backspace),
                KeyCode::Rune('a') => Some(Action::Home),
                KeyCode::Rune('e') => Some(Action::End),
                KeyCode::Up => Some(Action::Up),
                KeyCode::Down => Some(Action::Down),
                KeyCode::Left => Some(Action::Left),
                KeyCode::Right => Some(Action::Right),
                _ => None,
            };
        }

        match event.code {
            KeyCode::Rune(ch) => Some(Action::Insert(ch)),
            KeyCode::Space => Some(Action::Insert(' ')),
            KeyCode::Enter => Some(Action::Newline),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Tab => Some(Action::InsertTab),
            KeyCode::Up => Some(Action::Up),
            KeyCode::Down => Some(Action::Down),
            KeyCode::Left => Some(Action::Left),
            KeyCode::Right => Some(Action::Right),
            KeyCode::Home => Some(Action::Home),
            KeyCode::End => Some(Action::End),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::Escape | KeyCode::F(_) | KeyCode::Unknown => None,
        }
    }

    fn search_binding(event: KeyEvent, ctrl: bool) -> Option<Action> {
        match event.code {
            KeyCode::Rune('h') if ctrl => Some(Action::SearchBackspace),
            KeyCode::Rune('g') if ctrl => Some(Action::SearchCancel),
            _ if ctrl => None,
            KeyCode::Rune(ch) => Some(Action::SearchInput(ch)),
            KeyCode::Space => Some(Action::SearchInput(' ')),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Enter => Some(Action::SearchSubmit),
            KeyCode::Escape => Some(Action::SearchCancel),
            _ => None,
        }
    }

    /// Whether the action can change buffer text
    #[must_use]
    pub fn is_edit(self) -> bool {
        matches!(
            self,
            Action::Insert(_) | Action::InsertTab | Action::Newline | Action::Backspace
        )
    }
}
