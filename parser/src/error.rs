//! Parser error types.

use std::fmt;

/// A parse error with the offset of the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
    pub expected: Option<Vec<String>>,
    pub found: Option<String>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
            expected: None,
            found: None,
        }
    }

    pub fn unexpected_eof(offset: usize, expected: &str) -> Self {
        Self {
            message: format!("unexpected end of input, expected {}", expected),
            offset,
            expected: Some(vec![expected.to_string()]),
            found: Some("end of input".to_string()),
        }
    }

    pub fn unexpected_token(offset: usize, expected: &str, found: &str) -> Self {
        Self {
            message: format!("expected {}, found '{}'", expected, found),
            offset,
            expected: Some(vec![expected.to_string()]),
            found: Some(found.to_string()),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at offset {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
