//! Token types produced by tokenization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A word token extracted from text, with its byte offset in the original
/// input.
///
/// The offset is measured against the text prior to normalization, so it can
/// be used to locate the token in the source even though `text` has been
/// lowercased and stripped of punctuation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The normalized text content of the token
    pub text: String,

    /// Byte offset where this token starts in the original text
    pub offset: usize,
}

impl Token {
    /// Create a new token with the given text and byte offset.
    pub fn new<S: Into<String>>(text: S, offset: usize) -> Self {
        Token {
            text: text.into(),
            offset,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A word token with its line and column in the original text.
///
/// Lines and columns are 1-based; the column is the byte offset within the
/// line plus one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineToken {
    /// The normalized text content of the token
    pub text: String,

    /// 1-based line number
    pub line: usize,

    /// 1-based column (byte offset within the line + 1)
    pub column: usize,
}

impl LineToken {
    /// Create a new token with the given text, line, and column.
    pub fn new<S: Into<String>>(text: S, line: usize, column: usize) -> Self {
        LineToken {
            text: text.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for LineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.text)
    }
}
