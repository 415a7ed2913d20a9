//! Statement parsing.
//!
//! Dispatch looks at one token (two for assignment):
//! - LET: declaration
//! - IF / WHILE: control flow
//! - IDENT `=`: assignment
//! - anything else: expression statement

use super::Parser;
use crate::ast::*;
use crate::error::ParseResult;
use tracing::trace;

impl<'t> Parser<'t> {
    /// Parse statements until the token stream ends.
    pub fn parse_source(&mut self) -> ParseResult<Source> {
        let mut stmts = Vec::new();
        while !self.is_at_end() {
            stmts.push(self.parse_stmt()?);
        }
        Ok(Source { stmts })
    }

    /// Parse a single statement.
    pub fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        let Some(token) = self.peek() else {
            return Err(self.error_here("statement"));
        };
        trace!(token = %token.text, offset = token.offset, "parse statement");

        if token.is("LET") {
            self.parse_declaration().map(Stmt::Declaration)
        } else if token.is("IF") {
            self.parse_if().map(Stmt::If)
        } else if token.is("WHILE") {
            self.parse_while().map(Stmt::While)
        } else if self.peek_at(1).is_some_and(|next| next.is("=")) {
            self.parse_assignment().map(Stmt::Assignment)
        } else {
            self.parse_expr_stmt().map(Stmt::Expr)
        }
    }

    /// Parse statements until one of `terminators` is next.
    fn parse_block(&mut self, terminators: &[&str]) -> ParseResult<Vec<Stmt>> {
        let mut stmts = Vec::new();
        while !terminators.iter().any(|t| self.check(t)) {
            if self.is_at_end() {
                let expected = terminators
                    .iter()
                    .map(|t| format!("'{}'", t))
                    .collect::<Vec<_>>()
                    .join(" or ");
                return Err(self.error_here(&expected));
            }
            stmts.push(self.parse_stmt()?);
        }
        Ok(stmts)
    }

    // ==================== DECLARATION ====================

    pub(crate) fn parse_declaration(&mut self) -> ParseResult<DeclarationStmt> {
        let start = self.expect("LET")?.offset;
        let name = self.expect_name()?.text.clone();

        let type_name = if self.eat(":") {
            Some(self.expect_ident()?.text.clone())
        } else {
            None
        };

        let value = if self.eat("=") {
            Some(self.parse_expr()?)
        } else {
            None
        };

        self.expect(";")?;
        Ok(DeclarationStmt {
            name,
            type_name,
            value,
            span: self.span_from(start),
        })
    }

    // ==================== ASSIGNMENT ====================

    pub(crate) fn parse_assignment(&mut self) -> ParseResult<AssignmentStmt> {
        let target = self.expect_name()?;
        self.expect("=")?;
        let value = self.parse_expr()?;
        self.expect(";")?;
        Ok(AssignmentStmt {
            name: target.text.clone(),
            value,
            span: self.span_from(target.offset),
        })
    }

    // ==================== CONTROL FLOW ====================

    pub(crate) fn parse_if(&mut self) -> ParseResult<IfStmt> {
        let start = self.expect("IF")?.offset;
        let condition = self.parse_expr()?;
        self.expect("THEN")?;

        let then_stmts = self.parse_block(&["ELSE", "END"])?;
        let else_stmts = if self.eat("ELSE") {
            self.parse_block(&["END"])?
        } else {
            Vec::new()
        };
        self.expect("END")?;

        Ok(IfStmt {
            condition,
            then_stmts,
            else_stmts,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_while(&mut self) -> ParseResult<WhileStmt> {
        let start = self.expect("WHILE")?.offset;
        let condition = self.parse_expr()?;
        self.expect("DO")?;
        let body = self.parse_block(&["END"])?;
        self.expect("END")?;

        Ok(WhileStmt {
            condition,
            body,
            span: self.span_from(start),
        })
    }

    // ==================== EXPRESSION STATEMENT ====================

    pub(crate) fn parse_expr_stmt(&mut self) -> ParseResult<ExprStmt> {
        let expr = self.parse_expr()?;
        self.expect(";")?;
        let start = expr.span().start;
        Ok(ExprStmt {
            expr,
            span: self.span_from(start),
        })
    }
}
