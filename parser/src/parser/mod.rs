//! Parser for PLC token streams.
//!
//! This module is organized into submodules by parsing category:
//! - `expr`: Expression parsing (precedence tiers, literals, calls)
//! - `stmt`: Statement parsing (LET, assignment, IF, WHILE, calls)

mod expr;
mod stmt;

use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};
use tracing::debug;

/// Words with a fixed meaning that cannot name a variable.
const KEYWORDS: &[&str] = &[
    "LET", "IF", "THEN", "ELSE", "END", "WHILE", "DO", "TRUE", "FALSE",
];

// ==================== PARSER STATE ====================

/// Parser state: a cursor over an immutable token slice.
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    /// Offset reported for errors at end of input.
    end: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        let end = tokens
            .last()
            .map(|t| t.offset + t.text.len())
            .unwrap_or(0);
        Self {
            tokens,
            pos: 0,
            end,
        }
    }

    /// True once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

// ==================== TOKEN HELPERS ====================

impl<'t> Parser<'t> {
    pub(crate) fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn peek_at(&self, n: usize) -> Option<&'t Token> {
        self.tokens.get(self.pos + n)
    }

    pub(crate) fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Check the next token's text.
    pub(crate) fn check(&self, text: &str) -> bool {
        self.peek().is_some_and(|t| t.is(text))
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Consume the next token if its text matches.
    pub(crate) fn eat(&mut self, text: &str) -> bool {
        if self.check(text) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, text: &str) -> ParseResult<&'t Token> {
        if self.check(text) {
            self.advance().ok_or_else(|| self.error_here(text))
        } else {
            Err(self.error_here(&format!("'{}'", text)))
        }
    }

    pub(crate) fn expect_ident(&mut self) -> ParseResult<&'t Token> {
        if self.check_kind(TokenKind::Identifier) {
            self.advance().ok_or_else(|| self.error_here("identifier"))
        } else {
            Err(self.error_here("identifier"))
        }
    }

    /// An identifier that is not a keyword, for declared and assigned names.
    pub(crate) fn expect_name(&mut self) -> ParseResult<&'t Token> {
        match self.peek() {
            Some(token) if KEYWORDS.contains(&token.text.as_str()) => Err(
                ParseError::unexpected_token(token.offset, "variable name", &token.text),
            ),
            _ => self.expect_ident(),
        }
    }

    /// Error describing what was expected at the current position.
    pub(crate) fn error_here(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::unexpected_token(token.offset, expected, &token.text),
            None => ParseError::unexpected_eof(self.end, expected),
        }
    }

    /// Span from `start` to the end of the last consumed token.
    pub(crate) fn span_from(&self, start: usize) -> Span {
        let end = match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span().end,
            None => start,
        };
        Span::new(start, end.max(start))
    }

    /// Require that all tokens have been consumed.
    pub(crate) fn expect_end(&self) -> ParseResult<()> {
        match self.peek() {
            Some(token) => Err(ParseError::unexpected_token(
                token.offset,
                "end of input",
                &token.text,
            )),
            None => Ok(()),
        }
    }
}

// ==================== PUBLIC API ====================

/// Parse a whole token sequence into a source tree.
pub fn parse_source(tokens: &[Token]) -> ParseResult<Source> {
    let source = Parser::new(tokens).parse_source()?;
    debug!(statements = source.stmts.len(), "parsed source");
    Ok(source)
}

/// Lex and parse source text.
pub fn parse(input: &str) -> ParseResult<Source> {
    let tokens = Lexer::new(input).tokenize()?;
    parse_source(&tokens)
}

/// Parse a single expression from source text.
pub fn parse_expr(input: &str) -> ParseResult<Expr> {
    let tokens = Lexer::new(input).tokenize()?;
    let mut parser = Parser::new(&tokens);
    let expr = parser.parse_expr()?;
    parser.expect_end()?;
    Ok(expr)
}

/// Parse a single statement from source text.
pub fn parse_stmt(input: &str) -> ParseResult<Stmt> {
    let tokens = Lexer::new(input).tokenize()?;
    let mut parser = Parser::new(&tokens);
    let stmt = parser.parse_stmt()?;
    parser.expect_end()?;
    Ok(stmt)
}

// ==================== TESTS ====================
