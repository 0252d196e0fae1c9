//! Text area widget
//! Owns the buffer and drives the decode, edit, render loop

//! ## textarea/ Invariants
//!
//! - One key event produces at most one buffer mutation and exactly one frame.
//! - A history snapshot is recorded only when an edit actually changed text.
//! - Undo and redo restore the cursor together with the text.
//! - Search and movement never touch history.
//! - The terminal is in raw mode exactly while `run` is executing.

pub mod action;

use std::fmt;
use std::sync::Arc;

use crate::buffer::TextBuffer;
use crate::constants::{defaults, history as history_msgs, search as search_msgs};
use crate::error::{Result, TermpadError};
use crate::history::History;
use crate::mode::Mode;
use crate::render::{self, Frame};
use crate::search;
use crate::syntax::{Highlighter, Language};
use crate::term::{decoder, Session, Size, TerminalBackend};
use crate::viewport::Viewport;

pub use action::Action;

/// Text area settings
#[derive(Clone)]
pub struct TextAreaConfig {
    /// Header shown above the lines
    pub title: String,
    /// Dimmed line under the title
    pub hint: Option<String>,
    pub line_numbers: bool,
    /// Keep undo/redo history
    pub undo: bool,
    pub highlighter: Option<Arc<dyn Highlighter + Send + Sync>>,
    /// Spaces inserted by Tab
    pub tab_width: usize,
    /// Rows moved by PageUp/PageDown
    pub page_size: usize,
    /// Undo steps kept before the oldest is dropped
    pub history_limit: usize,
    /// Emit color codes; off for terminals that should get plain text
    pub color: bool,
}

impl Default for TextAreaConfig {
    fn default() -> Self {
        Self {
            title: defaults::TITLE.to_string(),
            hint: None,
            line_numbers: false,
            undo: true,
            highlighter: None,
            tab_width: defaults::TAB_WIDTH,
            page_size: defaults::PAGE_SIZE,
            history_limit: defaults::HISTORY_LIMIT,
            color: true,
        }
    }
}

impl fmt::Debug for TextAreaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextAreaConfig")
            .field("title", &self.title)
            .field("hint", &self.hint)
            .field("line_numbers", &self.line_numbers)
            .field("undo", &self.undo)
            .field("highlighter", &self.highlighter.as_ref().map(|h| h.name()))
            .field("tab_width", &self.tab_width)
            .field("page_size", &self.page_size)
            .field("history_limit", &self.history_limit)
            .field("color", &self.color)
            .finish()
    }
}

impl TextAreaConfig {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    #[must_use]
    pub fn undo(mut self, enabled: bool) -> Self {
        self.undo = enabled;
        self
    }

    /// Use a built-in highlighter; `PlainText` disables highlighting
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.highlighter = match language {
            Language::PlainText => None,
            lang => Some(Arc::new(lang)),
        };
        self
    }

    #[must_use]
    pub fn highlighter(mut self, highlighter: impl Highlighter + Send + Sync + 'static) -> Self {
        self.highlighter = Some(Arc::new(highlighter));
        self
    }

    #[must_use]
    pub fn tab_width(mut self, width: usize) -> Self {
        self.tab_width = width;
        self
    }

    #[must_use]
    pub fn page_size(mut self, rows: usize) -> Self {
        self.page_size = rows.max(1);
        self
    }

    #[must_use]
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    #[must_use]
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }
}

/// What the caller should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    /// Ctrl+D: the lines are ready
    Finished,
    /// Ctrl+C: the user cancelled
    Interrupted,
}

/// Multi-line text input
pub struct TextArea {
    config: TextAreaConfig,
    buffer: TextBuffer,
    history: Option<History<TextBuffer>>,
    mode: Mode,
    /// Term being typed in Search mode
    search_input: String,
    /// Term of the last submitted search, repeated by search-next
    last_search: Option<String>,
    /// Shown once on the next frame
    message: Option<String>,
    viewport: Viewport,
}

impl TextArea {
    #[must_use]
    pub fn new(config: TextAreaConfig) -> Self {
        Self::with_buffer(config, TextBuffer::new())
    }

    /// Start from existing text; the cursor starts at (0, 0)
    pub fn with_lines<I, S>(config: TextAreaConfig, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_buffer(config, TextBuffer::from_lines(lines))
    }

    fn with_buffer(config: TextAreaConfig, buffer: TextBuffer) -> Self {
        let history = config
            .undo
            .then(|| History::with_limit(config.history_limit));
        Self {
            config,
            buffer,
            history,
            mode: Mode::Insert,
            search_input: String::new(),
            last_search: None,
            message: None,
            viewport: Viewport::default(),
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn config(&self) -> &TextAreaConfig {
        &self.config
    }

    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Pending status message, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Current contents, one string per line
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.buffer.to_strings()
    }

    /// Run the widget on `term` until the user finishes or cancels.
    ///
    /// Raw mode is held for the duration of the call and restored on every
    /// return path. Cancelling returns an error for which
    /// `TermpadError::is_interrupted` is true.
    pub fn run<T: TerminalBackend>(&mut self, term: &mut T) -> Result<Vec<String>> {
        let mut session = Session::begin(term)?;
        tracing::info!(title = %self.config.title, "text area started");

        self.redraw(&mut *session)?;
        loop {
            let event = decoder::read_event(&mut *session)?;
            match self.handle_event(event) {
                Signal::Continue => self.redraw(&mut *session)?,
                Signal::Finished => {
                    tracing::info!(lines = self.buffer.line_count(), "text area finished");
                    return Ok(self.lines());
                }
                Signal::Interrupted => {
                    tracing::info!("text area interrupted");
                    return Err(TermpadError::interrupted());
                }
            }
        }
    }

    /// Apply one key event.
    pub fn handle_event(&mut self, event: crate::key::KeyEvent) -> Signal {
        self.message = None;
        match Action::from_key(event, self.mode) {
            Some(action) => {
                tracing::debug!(key = %event, ?action, mode = self.mode.name(), "action");
                self.apply(action)
            }
            None => {
                tracing::trace!(key = %event, "unbound key ignored");
                Signal::Continue
            }
        }
    }

    /// Perform `action` against the buffer and widget state
    pub fn apply(&mut self, action: Action) -> Signal {
        if action.is_edit() {
            self.edit(action);
            return Signal::Continue;
        }

        let page = self.config.page_size;
        match action {
            Action::Finish => return Signal::Finished,
            Action::Interrupt => return Signal::Interrupted,

            Action::Left => {
                self.buffer.move_left();
            }
            Action::Right => {
                self.buffer.move_right();
            }
            Action::Up => {
                self.buffer.move_up();
            }
            Action::Down => {
                self.buffer.move_down();
            }
            Action::Home => {
                self.buffer.move_home();
            }
            Action::End => {
                self.buffer.move_end();
            }
            Action::PageUp => {
                self.buffer.move_rows_up(page);
            }
            Action::PageDown => {
                self.buffer.move_rows_down(page);
            }

            Action::Undo => self.undo(),
            Action::Redo => self.redo(),

            Action::StartSearch => {
                self.mode = Mode::Search;
                self.search_input.clear();
            }
            Action::SearchNext => self.search_next(),
            Action::SearchInput(ch) => self.search_input.push(ch),
            Action::SearchBackspace => {
                self.search_input.pop();
            }
            Action::SearchSubmit => {
                self.mode = Mode::Insert;
                let term = std::mem::take(&mut self.search_input);
                self.search(term);
            }
            Action::SearchCancel => {
                self.mode = Mode::Insert;
                self.search_input.clear();
            }

            Action::Insert(_) | Action::InsertTab | Action::Newline | Action::Backspace => {}
        }
        Signal::Continue
    }

    fn edit(&mut self, action: Action) {
        let before = self.history.is_some().then(|| self.buffer.clone());
        let changed = match action {
            Action::Insert(ch) => {
                self.buffer.insert_char(ch);
                true
            }
            Action::InsertTab => {
                let spaces = " ".repeat(self.config.tab_width);
                self.buffer.insert_str(&spaces);
                !spaces.is_empty()
            }
            Action::Newline => {
                self.buffer.insert_newline();
                true
            }
            Action::Backspace => self.buffer.backspace(),
            _ => false,
        };

        if let (true, Some(before), Some(history)) = (changed, before, self.history.as_mut()) {
            history.record(&before);
        }
    }

    fn undo(&mut self) {
        let Some(history) = self.history.as_mut() else {
            return;
        };
        match history.undo(&self.buffer) {
            Some(state) => self.buffer = state,
            None => self.message = Some(history_msgs::ALREADY_OLDEST.to_string()),
        }
    }

    fn redo(&mut self) {
        let Some(history) = self.history.as_mut() else {
            return;
        };
        match history.redo() {
            Some(state) => self.buffer = state,
            None => self.message = Some(history_msgs::ALREADY_NEWEST.to_string()),
        }
    }

    fn search(&mut self, term: String) {
        if term.is_empty() {
            return;
        }
        let start_row = self.buffer.cursor().row;
        match search::find(self.buffer.lines(), start_row, &term) {
            Some(pos) => {
                tracing::debug!(term = %term, row = pos.row, col = pos.col, "search hit");
                self.buffer.set_cursor(pos);
            }
            None => self.message = Some(format!("{}: {term}", search_msgs::NOT_FOUND)),
        }
        self.last_search = Some(term);
    }

    fn search_next(&mut self) {
        let Some(term) = self.last_search.as_deref() else {
            self.message = Some(search_msgs::NO_PREVIOUS.to_string());
            return;
        };
        match search::find_after(self.buffer.lines(), self.buffer.cursor(), term) {
            Some(pos) => self.buffer.set_cursor(pos),
            None => self.message = Some(format!("{}: {term}", search_msgs::NOT_FOUND)),
        }
    }

    /// Build the frame for a terminal of `size`, scrolling the viewport so
    /// the cursor row is visible.
    pub fn render(&mut self, size: Size) -> String {
        let chrome = render::chrome_rows(self.mode, self.message.is_some());
        self.viewport
            .set_visible_rows(usize::from(size.rows).saturating_sub(chrome));
        self.viewport
            .update(self.buffer.cursor().row, self.buffer.line_count());

        let frame = Frame {
            buffer: &self.buffer,
            mode: self.mode,
            title: &self.config.title,
            hint: self.config.hint.as_deref(),
            line_numbers: self.config.line_numbers,
            highlighter: self
                .config
                .highlighter
                .as_deref()
                .map(|h| h as &dyn Highlighter),
            search_input: &self.search_input,
            message: self.message.as_deref(),
            rows: self.viewport.range(self.buffer.line_count()),
            color: self.config.color,
        };
        render::render_frame(&frame)
    }

    fn redraw<T: TerminalBackend + ?Sized>(&mut self, term: &mut T) -> Result<()> {
        let size = term.get_size()?;
        let frame = self.render(size);
        term.write(frame.as_bytes())
    }
}
