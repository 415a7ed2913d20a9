//! PLC Parser
//!
//! This crate turns source text into an untyped syntax tree:
//! - Lexing into classified tokens with source offsets
//! - Statement parsing (LET, assignment, IF, WHILE, expression statements)
//! - Expression parsing (equality, additive, multiplicative, calls, groups)
//! - Error handling with token offsets

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::*;
pub use error::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse, parse_expr, parse_source, parse_stmt, Parser};
