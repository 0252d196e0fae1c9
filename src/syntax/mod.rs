//! Syntax highlighting
//!
//! A highlighter is an ordered list of pattern/color rules. Rules are applied
//! in order over the whole line; text claimed by an earlier rule is never
//! repainted by a later one, and a later match that overlaps claimed text is
//! dropped entirely.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::Color;
use crate::constants::errors;
use crate::error::{ErrorType, Result, TermpadError};

/// A pattern and the color its matches are painted with
#[derive(Debug, Clone)]
pub struct HighlightRule {
    pattern: Regex,
    color: Color,
}

impl HighlightRule {
    /// Compile `pattern` into a rule
    pub fn new(pattern: &str, color: Color) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            TermpadError::new(ErrorType::Parse, errors::REGEX_COMPILE_ERROR, e.to_string())
        })?;
        Ok(Self { pattern, color })
    }

    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// A painted region of a line, in char indices (`end` exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub color: Color,
}

/// Anything that can hand out ordered highlight rules
pub trait Highlighter {
    /// Display name shown on the status line
    fn name(&self) -> &str;

    /// Rules in paint priority order
    fn rules(&self) -> &[HighlightRule];

    /// Colored spans of `line`, sorted and non-overlapping
    fn spans(&self, line: &str) -> Vec<Span> {
        spans(self.rules(), line)
    }

    /// `line` with every span wrapped in its color and a reset
    fn highlight(&self, line: &str) -> String {
        let chars: Vec<char> = line.chars().collect();
        crate::render::paint_line(&chars, &self.spans(line), None)
    }
}

/// Compute the spans produced by `rules` over `line`.
#[must_use]
pub fn spans(rules: &[HighlightRule], line: &str) -> Vec<Span> {
    let mut claimed: Vec<(usize, usize, Color)> = Vec::new();

    for rule in rules {
        for m in rule.pattern.find_iter(line) {
            if m.start() == m.end() {
                continue;
            }
            let overlaps = claimed
                .iter()
                .any(|&(start, end, _)| m.start() < end && start < m.end());
            if !overlaps {
                claimed.push((m.start(), m.end(), rule.color));
            }
        }
    }
    claimed.sort_by_key(|&(start, _, _)| start);

    // Byte offsets to char indices
    let mut byte_to_char = vec![0; line.len() + 1];
    let mut count = 0;
    for (byte, _) in line.char_indices() {
        byte_to_char[byte] = count;
        count += 1;
    }
    byte_to_char[line.len()] = count;

    claimed
        .into_iter()
        .map(|(start, end, color)| Span {
            start: byte_to_char[start],
            end: byte_to_char[end],
            color,
        })
        .collect()
}

/// A user-supplied rule set
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    rules: Vec<HighlightRule>,
}

impl RuleSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule; it paints after every rule already added
    pub fn rule(mut self, pattern: &str, color: Color) -> Result<Self> {
        self.rules.push(HighlightRule::new(pattern, color)?);
        Ok(self)
    }
}

impl Highlighter for RuleSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }
}

/// Name reported when no rules apply
pub const PLAIN_TEXT: &str = "Plain Text";

/// Built-in highlighters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    PlainText,
    Rust,
    Markdown,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::PlainText, Language::Rust, Language::Markdown];
}

fn compile(rules: &[(&str, Color)]) -> Vec<HighlightRule> {
    rules
        .iter()
        .filter_map(|&(pattern, color)| match HighlightRule::new(pattern, color) {
            Ok(rule) => Some(rule),
            Err(e) => {
                tracing::error!(pattern, error = %e, "invalid built-in highlight rule");
                None
            }
        })
        .collect()
}

static RUST_RULES: LazyLock<Vec<HighlightRule>> = LazyLock::new(|| {
    compile(&[
        (r"//.*$", Color::DarkGrey),
        (r#""(?:[^"\\]|\\.)*""#, Color::DarkGreen),
        (r"'(?:[^'\\]|\\.)'", Color::DarkGreen),
        (
            r"\b(?:as|break|const|continue|crate|else|enum|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|type|unsafe|use|where|while)\b",
            Color::Magenta,
        ),
        (r"\b[a-z_][a-z0-9_]*!", Color::Cyan),
        (r"\b[A-Z][A-Za-z0-9_]*\b", Color::Yellow),
        (r"\b\d[\d_]*(?:\.\d+)?\b", Color::DarkYellow),
    ])
});

static MARKDOWN_RULES: LazyLock<Vec<HighlightRule>> = LazyLock::new(|| {
    compile(&[
        (r"^#{1,6}\s.*$", Color::Blue),
        (r"^>.*$", Color::DarkGrey),
        (r"`[^`]+`", Color::DarkGreen),
        (r"\*\*[^*]+\*\*", Color::Yellow),
        (r"\*[^*\s][^*]*\*|\b_[^_]+_\b", Color::DarkYellow),
        (r"\[[^\]]*\]\([^)]*\)", Color::Cyan),
        (r"^\s*(?:[-*+]|\d+\.)\s", Color::Magenta),
    ])
});

impl Highlighter for Language {
    fn name(&self) -> &str {
        match self {
            Language::PlainText => PLAIN_TEXT,
            Language::Rust => "Rust",
            Language::Markdown => "Markdown",
        }
    }

    fn rules(&self) -> &[HighlightRule] {
        match self {
            Language::PlainText => &[],
            Language::Rust => RUST_RULES.as_slice(),
            Language::Markdown => MARKDOWN_RULES.as_slice(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = TermpadError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" | "txt" | "none" => Ok(Language::PlainText),
            "rust" | "rs" => Ok(Language::Rust),
            "markdown" | "md" => Ok(Language::Markdown),
            other => Err(TermpadError::new(
                ErrorType::Parse,
                errors::UNKNOWN_LANGUAGE,
                format!("unknown language: {other}"),
            )),
        }
    }
}
