//! Crossterm-based terminal backend
//! Raw mode and size queries go through crossterm; key bytes are read
//! straight from stdin and decoded by `term::decoder`.

use crossterm::{cursor, execute, terminal};
use std::io::{self, stdin, stdout, IsTerminal, Read, Write};

use crate::constants::errors;
use crate::error::{ErrorType, Result, TermpadError};
use crate::term::{ByteSource, Size, TerminalBackend};

/// Crossterm-based terminal backend implementation
#[derive(Debug, Default)]
pub struct CrosstermBackend {
    raw_mode_enabled: bool,
    /// Byte handed back by the decoder
    pending: Option<u8>,
}

impl CrosstermBackend {
    pub fn new() -> Result<Self> {
        Ok(CrosstermBackend {
            raw_mode_enabled: false,
            pending: None,
        })
    }

    #[must_use]
    pub fn is_raw(&self) -> bool {
        self.raw_mode_enabled
    }
}

/// Whether stdin is attached to a terminal rather than a pipe or file
#[must_use]
pub fn is_stdin_terminal() -> bool {
    stdin().is_terminal()
}

/// Raw mode only makes sense on a TTY; refuse before touching terminal state.
fn ensure_terminal(is_tty: bool) -> Result<()> {
    if is_tty {
        Ok(())
    } else {
        Err(TermpadError::fatal(
            errors::NOT_A_TERMINAL,
            "stdin is not a terminal; run termpad interactively",
        ))
    }
}

impl ByteSource for CrosstermBackend {
    fn read_byte(&mut self) -> io::Result<u8> {
        if let Some(b) = self.pending.take() {
            return Ok(b);
        }
        let mut buf = [0u8; 1];
        stdin().lock().read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn unread(&mut self, byte: u8) {
        self.pending = Some(byte);
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<()> {
        ensure_terminal(is_stdin_terminal())?;
        terminal::enable_raw_mode().map_err(|e| {
            TermpadError::fatal(
                errors::RAW_MODE_FAILED,
                format!("Failed to enable raw mode: {e}"),
            )
        })?;
        self.raw_mode_enabled = true;
        Ok(())
    }

    fn deinit(&mut self) {
        // Show cursor before exiting
        let _ = execute!(stdout(), cursor::Show);

        if self.raw_mode_enabled {
            if let Err(e) = terminal::disable_raw_mode() {
                tracing::warn!(error = %e, "failed to restore terminal mode");
            }
            self.raw_mode_enabled = false;
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut out = stdout().lock();
        out.write_all(bytes)
            .and_then(|()| out.flush())
            .map_err(|e| {
                TermpadError::new(ErrorType::Io, errors::WRITE_FAILED, format!("Write failed: {e}"))
            })
    }

    fn get_size(&self) -> Result<Size> {
        let (cols, rows) = terminal::size().map_err(|e| {
            TermpadError::new(
                ErrorType::Terminal,
                errors::SIZE_FAILED,
                format!("Failed to get terminal size: {e}"),
            )
        })?;
        Ok(Size { rows, cols })
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        if self.raw_mode_enabled {
            self.deinit();
        }
    }
}
