//! Test utilities
//! Shared testing helpers and mocks

use std::collections::VecDeque;
use std::io;

use crate::constants::errors;
use crate::error::{Result, TermpadError};
use crate::term::{ByteSource, Size, TerminalBackend};

/// Mock terminal backend for testing
/// Replays scripted input and records all output for verification
pub struct MockTerminal {
    pub input: VecDeque<u8>,
    pub writes: Vec<Vec<u8>>,
    pub size: (u16, u16),
    pub init_calls: usize,
    pub deinit_calls: usize,
    pub raw: bool,
    /// Make `init` fail, as if raw mode could not be entered
    pub fail_init: bool,
}

impl MockTerminal {
    /// Create a new mock terminal with specified dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            input: VecDeque::new(),
            writes: Vec::new(),
            size: (rows, cols),
            init_calls: 0,
            deinit_calls: 0,
            raw: false,
            fail_init: false,
        }
    }

    /// A 24x80 terminal that will read `bytes`
    pub fn with_input(bytes: &[u8]) -> Self {
        let mut term = Self::new(24, 80);
        term.push_input(bytes);
        term
    }

    /// Queue more bytes for reading
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    /// Get all written bytes as a single vector
    pub fn get_written_bytes(&self) -> Vec<u8> {
        self.writes.iter().flatten().copied().collect()
    }

    /// Get all written bytes as a string (lossy UTF-8 conversion)
    pub fn get_written_string(&self) -> String {
        String::from_utf8_lossy(&self.get_written_bytes()).to_string()
    }

    /// The last frame written
    pub fn last_write(&self) -> String {
        self.writes
            .last()
            .map(|w| String::from_utf8_lossy(w).to_string())
            .unwrap_or_default()
    }

    /// Clear all recorded output (useful for testing multiple renders)
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl ByteSource for MockTerminal {
    fn read_byte(&mut self) -> io::Result<u8> {
        self.input
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "mock input exhausted"))
    }

    fn unread(&mut self, byte: u8) {
        self.input.push_front(byte);
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> Result<()> {
        self.init_calls += 1;
        if self.fail_init {
            return Err(TermpadError::fatal(
                errors::RAW_MODE_FAILED,
                "mock refused raw mode",
            ));
        }
        self.raw = true;
        Ok(())
    }

    fn deinit(&mut self) {
        self.deinit_calls += 1;
        self.raw = false;
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn get_size(&self) -> Result<Size> {
        Ok(Size {
            rows: self.size.0,
            cols: self.size.1,
        })
    }
}
