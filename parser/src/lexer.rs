//! Lexer (tokenizer) for PLC source text.

use crate::{ParseError, ParseResult, Span};
use std::fmt;
use tracing::debug;

/// Token classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Names and keywords (`LET`, `IF`, `TRUE`, ...).
    Identifier,
    Integer,
    Decimal,
    /// Text includes the surrounding quotes.
    String,
    /// `==`, `!=`, or any other single character.
    Operator,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Decimal => "decimal",
            TokenKind::String => "string",
            TokenKind::Operator => "operator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its literal text and source offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    pub fn identifier(text: impl Into<String>, offset: usize) -> Self {
        Self::new(TokenKind::Identifier, text, offset)
    }

    pub fn operator(text: impl Into<String>, offset: usize) -> Self {
        Self::new(TokenKind::Operator, text, offset)
    }

    /// Check whether this token's text equals `text`.
    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }

    pub fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.text.len())
    }
}

/// Lexer state.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            pos: 0,
        }
    }

    /// Tokenize all input into a vector of tokens.
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        debug!(count = tokens.len(), "lexed tokens");
        Ok(tokens)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.pos = pos + c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn emit(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, &self.input[start..self.pos], start)
    }

    fn next_token(&mut self) -> ParseResult<Option<Token>> {
        self.skip_whitespace();

        let start = self.pos;
        let Some(c) = self.next_char() else {
            return Ok(None);
        };

        let kind = match c {
            '_' | 'a'..='z' | 'A'..='Z' => {
                self.scan_identifier();
                TokenKind::Identifier
            }
            '0'..='9' => self.scan_number(c, start)?,
            '"' => {
                self.scan_string(start)?;
                TokenKind::String
            }
            '=' | '!' => {
                if self.peek_char() == Some('=') {
                    self.next_char();
                }
                TokenKind::Operator
            }
            _ => TokenKind::Operator,
        };

        Ok(Some(self.emit(kind, start)))
    }

    fn scan_identifier(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn scan_digits(&mut self) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.next_char();
                count += 1;
            } else {
                break;
            }
        }
        count
    }

    fn scan_number(&mut self, first: char, start: usize) -> ParseResult<TokenKind> {
        let rest = self.scan_digits();
        if first == '0' && rest > 0 {
            return Err(ParseError::new(
                format!(
                    "leading zeros are not allowed in '{}'",
                    &self.input[start..self.pos]
                ),
                start,
            ));
        }

        if self.peek_char() != Some('.') {
            return Ok(TokenKind::Integer);
        }
        self.next_char();

        if self.scan_digits() == 0 {
            return Err(ParseError::new(
                format!(
                    "invalid decimal literal '{}', expected digits after '.'",
                    &self.input[start..self.pos]
                ),
                start,
            ));
        }
        Ok(TokenKind::Decimal)
    }

    fn scan_string(&mut self, start: usize) -> ParseResult<()> {
        loop {
            match self.next_char() {
                None | Some('\n') | Some('\r') => {
                    return Err(ParseError::new("unterminated string literal", start));
                }
                Some('"') => return Ok(()),
                Some('\\') => {
                    return Err(ParseError::new(
                        "escape sequences are not supported in string literals",
                        self.pos - 1,
                    ));
                }
                Some(_) => {}
            }
        }
    }
}
