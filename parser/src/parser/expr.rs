//! Expression parsing.
//!
//! Precedence tiers, weakest first:
//! - Equality: ==, !=
//! - Additive: +, -
//! - Multiplicative: *, /
//! - Primary: literals, variables, function calls, groups

use super::Parser;
use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Token, TokenKind};

impl<'t> Parser<'t> {
    /// Parse an expression.
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_equality()
    }

    fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.parse_binary_tier(&[BinaryOp::Eq, BinaryOp::NotEq], Self::parse_additive)
    }

    fn parse_additive(&mut self) -> ParseResult<Expr> {
        self.parse_binary_tier(&[BinaryOp::Add, BinaryOp::Sub], Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        self.parse_binary_tier(&[BinaryOp::Mul, BinaryOp::Div], Self::parse_primary)
    }

    /// One operand from the tier below, then fold `op operand` pairs to the left.
    fn parse_binary_tier(
        &mut self,
        ops: &[BinaryOp],
        mut operand: impl FnMut(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some(op) = self.peek_binary_op(ops) {
            let start = left.span().start;
            self.advance();
            let right = operand(self)?;
            let span = self.span_from(start);
            left = Expr::Binary(op, Box::new(left), Box::new(right), span);
        }

        Ok(left)
    }

    fn peek_binary_op(&self, ops: &[BinaryOp]) -> Option<BinaryOp> {
        let token = self.peek()?;
        if token.kind != TokenKind::Operator {
            return None;
        }
        BinaryOp::from_symbol(&token.text).filter(|op| ops.contains(op))
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.peek() else {
            return Err(self.error_here("expression"));
        };

        match token.kind {
            TokenKind::Integer => {
                self.advance();
                let value = IntegerLiteral::new(token.text.as_str()).ok_or_else(|| {
                    ParseError::new(format!("invalid integer literal '{}'", token.text), token.offset)
                })?;
                Ok(literal(LiteralKind::Integer(value), token))
            }
            TokenKind::Decimal => {
                self.advance();
                let value = DecimalLiteral::new(token.text.as_str()).ok_or_else(|| {
                    ParseError::new(format!("invalid decimal literal '{}'", token.text), token.offset)
                })?;
                Ok(literal(LiteralKind::Decimal(value), token))
            }
            TokenKind::String => {
                self.advance();
                let contents = token
                    .text
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .ok_or_else(|| {
                        ParseError::new(
                            format!("malformed string literal {}", token.text),
                            token.offset,
                        )
                    })?;
                Ok(literal(LiteralKind::String(contents.to_string()), token))
            }
            TokenKind::Identifier if token.is("TRUE") || token.is("FALSE") => {
                self.advance();
                Ok(literal(LiteralKind::Bool(token.is("TRUE")), token))
            }
            TokenKind::Identifier => {
                self.advance();
                if self.check("(") {
                    self.parse_fn_call(token)
                } else {
                    Ok(Expr::Var(token.text.clone(), token.span()))
                }
            }
            TokenKind::Operator if token.is("(") => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(")")?;
                let span = self.span_from(token.offset);
                Ok(Expr::Group(Box::new(inner), span))
            }
            TokenKind::Operator => Err(self.error_here("expression")),
        }
    }

    /// Arguments of `name(...)`; the name has been consumed.
    fn parse_fn_call(&mut self, name: &Token) -> ParseResult<Expr> {
        self.expect("(")?;

        let mut args = Vec::new();
        if !self.check(")") {
            loop {
                args.push(self.parse_expr()?);
                if !self.eat(",") {
                    break;
                }
            }
        }
        self.expect(")")?;

        let span = self.span_from(name.offset);
        Ok(Expr::FnCall(FnCall {
            name: name.text.clone(),
            args,
            span,
        }))
    }
}

fn literal(kind: LiteralKind, token: &Token) -> Expr {
    Expr::Literal(Literal {
        kind,
        span: token.span(),
    })
}
