//! Error type shared by every termpad operation
//!
//! Each error carries a kind, a stable code from `constants::errors` and a
//! message. Cancelling with Ctrl+C is reported through the same type so
//! callers have one `Result` to match on.

use std::fmt;
use std::io;

use crate::constants::errors;

/// How badly the session is affected
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Expected outcome, e.g. the user cancelled
    Info,
    /// The operation failed
    Error,
    /// The terminal could not be set up; nothing was drawn
    Fatal,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Error => "error",
            Self::Fatal => "fatal",
        })
    }
}

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Reading keys or writing frames failed
    Io,
    /// Raw mode, size query or TTY check failed
    Terminal,
    /// Highlight pattern or language name rejected
    Parse,
    /// Ctrl+C
    Interrupted,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Io => "io",
            Self::Terminal => "terminal",
            Self::Parse => "parse",
            Self::Interrupted => "interrupted",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermpadError {
    pub severity: ErrorSeverity,
    pub kind: ErrorType,
    /// Stable identifier from `constants::errors`
    pub code: &'static str,
    pub message: String,
}

impl TermpadError {
    pub fn new(kind: ErrorType, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code,
            message: message.into(),
        }
    }

    /// A terminal setup failure after which nothing can be drawn
    pub fn fatal(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Fatal,
            ..Self::new(ErrorType::Terminal, code, message)
        }
    }

    /// The outcome of the user pressing the cancel key.
    #[must_use]
    pub fn interrupted() -> Self {
        Self {
            severity: ErrorSeverity::Info,
            ..Self::new(ErrorType::Interrupted, errors::INTERRUPTED, errors::MSG_INTERRUPTED)
        }
    }

    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        self.kind == ErrorType::Interrupted
    }

    #[must_use]
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for TermpadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]: {}", self.kind, self.severity, self.code, self.message)
    }
}

impl std::error::Error for TermpadError {}

impl From<io::Error> for TermpadError {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorType::Io, errors::IO_ERROR, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TermpadError>;
