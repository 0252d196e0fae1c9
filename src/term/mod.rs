//! Terminal backend abstraction
//! Provides platform-agnostic interface for terminal operations

/// ## term/ Invariants
///
/// - Terminal handling is isolated behind the `TerminalBackend` boundary.
/// - Raw mode is enabled before input processing begins.
/// - Terminal state is restored on every exit path once a `Session` is dropped.
/// - Terminal code never depends on text area internals.
use std::ops::{Deref, DerefMut};

use crate::error::Result;

pub mod ansi;
pub mod crossterm;
pub mod decoder;

pub use decoder::{ByteSource, ReadSource};

/// Terminal size information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Terminal backend trait
/// All terminal backends must implement these operations
pub trait TerminalBackend: ByteSource {
    /// Enter raw mode
    fn init(&mut self) -> Result<()>;

    /// Restore the terminal to the mode it had before `init`
    fn deinit(&mut self);

    /// Write bytes to the output and flush them
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Get terminal dimensions
    fn get_size(&self) -> Result<Size>;
}

/// A raw-mode session over a backend.
///
/// `begin` switches the backend into raw mode; dropping the session switches
/// it back, whether the session ended normally, by cancellation or by error.
pub struct Session<'a, T: TerminalBackend> {
    term: &'a mut T,
}

impl<'a, T: TerminalBackend> Session<'a, T> {
    pub fn begin(term: &'a mut T) -> Result<Self> {
        term.init()?;
        tracing::debug!("terminal session started");
        Ok(Self { term })
    }
}

impl<T: TerminalBackend> Deref for Session<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.term
    }
}

impl<T: TerminalBackend> DerefMut for Session<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.term
    }
}

impl<T: TerminalBackend> Drop for Session<'_, T> {
    fn drop(&mut self) {
        self.term.deinit();
        tracing::debug!("terminal session restored");
    }
}
