//! Per-cell validation rules.
//!
//! A cell is either numeric or text-with-pattern. Numeric acceptance follows
//! the ECMAScript `Number(string)` coercion used by browser inputs, so some
//! lenient inputs are accepted on purpose:
//!
//! - `""` and whitespace-only strings (they coerce to 0)
//! - `Infinity`, `-Infinity`, `1e5`, `.5`, `5.`
//! - `0x1F`, `0o17`, `0b101` (unsigned only)
//!
//! while `-`, `1e`, `inf`, `NaN` and `1_000` are rejected.

use crate::error::{GridError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Pattern used by text cells in a fresh grid.
pub const LETTERS_PATTERN: &str = "^[a-zA-Z]+$";

/// A compiled text pattern that remembers its source.
#[derive(Clone)]
pub struct TextPattern {
    source: String,
    regex: Regex,
}

impl TextPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| GridError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The `^[a-zA-Z]+$` pattern, compiled once and shared.
    pub fn letters() -> Self {
        static LETTERS: OnceLock<Regex> = OnceLock::new();
        let regex = LETTERS
            .get_or_init(|| Regex::new(LETTERS_PATTERN).expect("letters pattern must compile"))
            .clone();
        Self {
            source: LETTERS_PATTERN.to_string(),
            regex,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PartialEq for TextPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for TextPattern {}

impl fmt::Debug for TextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextPattern").field(&self.source).finish()
    }
}

/// Validation rule attached to a cell at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    /// Value must coerce to a number.
    Numeric,
    /// Value must match the pattern.
    Text { pattern: TextPattern },
}

impl Validation {
    /// Rule for the cell at `index` in a fresh grid: even indices are
    /// numeric, odd indices accept letters only.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Validation::Numeric
        } else {
            Validation::Text {
                pattern: TextPattern::letters(),
            }
        }
    }

    pub fn text(pattern: &str) -> Result<Self> {
        Ok(Validation::Text {
            pattern: TextPattern::new(pattern)?,
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Validation::Numeric => "numeric",
            Validation::Text { .. } => "text",
        }
    }

    /// Check a proposed value against this rule.
    pub fn check(&self, value: &str) -> Result<()> {
        match self {
            Validation::Numeric if !is_numeric(value) => Err(GridError::NotNumeric),
            Validation::Text { pattern } if !pattern.is_match(value) => {
                Err(GridError::NotLetters)
            }
            _ => Ok(()),
        }
    }
}

/// Whether `value` coerces to a number (i.e. is not NaN) under ECMAScript
/// string-to-number rules.
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim_matches(is_js_whitespace);
    trimmed.is_empty() || numeric_literal_re().is_match(trimmed)
}

fn numeric_literal_re() -> &'static Regex {
    static NUMERIC_RE: OnceLock<Regex> = OnceLock::new();
    NUMERIC_RE.get_or_init(|| {
        Regex::new(
            r"^(?:[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+)$",
        )
        .expect("numeric literal regex must compile")
    })
}

/// ECMAScript WhiteSpace and LineTerminator code points.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
