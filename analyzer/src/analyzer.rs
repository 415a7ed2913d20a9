//! Main analyzer implementation.

use crate::{
    binary_result, check_assignable, AnalyzerError, AnalyzerResult, Scope, Type, TypedExpr,
    TypedExprKind, TypedSource, TypedStmt, Value,
};
use plc_parser::{
    AssignmentStmt, BinaryOp, DeclarationStmt, Expr, ExprStmt, FnCall, IfStmt, Literal,
    LiteralKind, Source, Span, Stmt, WhileStmt,
};
use plc_registry::Registry;
use regex_lite::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Options that change how statements are scoped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Analyze each IF branch and WHILE body in its own scope frame.
    ///
    /// Off by default: bodies share the enclosing scope, so a variable
    /// declared inside a loop body stays visible after the loop.
    pub block_scopes: bool,
}

/// Characters allowed in string literals.
fn string_charset() -> &'static Regex {
    static CHARSET: OnceLock<Regex> = OnceLock::new();
    CHARSET.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_!?./+\-*]*$").expect("string charset pattern is valid")
    })
}

/// Analyze a whole program in a fresh scope with default options.
pub fn analyze(registry: &Registry, source: &Source) -> AnalyzerResult<TypedSource> {
    Analyzer::new(registry).analyze_source(source)
}

/// The Analyzer performs name resolution and type checking.
pub struct Analyzer<'r> {
    /// Built-in types and functions.
    registry: &'r Registry,
    /// Current variable scope.
    scope: Scope,
    options: AnalyzerOptions,
}

impl<'r> Analyzer<'r> {
    /// Create a new analyzer with an empty scope.
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_scope(registry, Scope::new())
    }

    /// Create an analyzer that starts from an existing scope.
    pub fn with_scope(registry: &'r Registry, scope: Scope) -> Self {
        Self {
            registry,
            scope,
            options: AnalyzerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn into_scope(self) -> Scope {
        self.scope
    }

    /// Analyze every statement of a program, stopping at the first error.
    pub fn analyze_source(&mut self, source: &Source) -> AnalyzerResult<TypedSource> {
        let stmts = self.analyze_stmts(&source.stmts)?;
        debug!(statements = stmts.len(), "analyzed source");
        Ok(TypedSource { stmts })
    }

    fn analyze_stmts(&mut self, stmts: &[Stmt]) -> AnalyzerResult<Vec<TypedStmt>> {
        stmts.iter().map(|stmt| self.analyze_stmt(stmt)).collect()
    }

    /// Statements of an IF branch or WHILE body.
    fn analyze_block(&mut self, stmts: &[Stmt]) -> AnalyzerResult<Vec<TypedStmt>> {
        if !self.options.block_scopes {
            return self.analyze_stmts(stmts);
        }
        self.scope.push();
        let result = self.analyze_stmts(stmts);
        self.scope.pop();
        result
    }

    /// Analyze a statement.
    pub fn analyze_stmt(&mut self, stmt: &Stmt) -> AnalyzerResult<TypedStmt> {
        match stmt {
            Stmt::Expr(s) => self.analyze_expr_stmt(s),
            Stmt::Declaration(s) => self.analyze_declaration(s),
            Stmt::Assignment(s) => self.analyze_assignment(s),
            Stmt::If(s) => self.analyze_if(s),
            Stmt::While(s) => self.analyze_while(s),
        }
    }

    fn analyze_expr_stmt(&mut self, stmt: &ExprStmt) -> AnalyzerResult<TypedStmt> {
        let expr = self.analyze_expr(&stmt.expr)?;
        match expr.kind {
            TypedExprKind::Function { .. } => Ok(TypedStmt::Expr(expr)),
            _ => Err(AnalyzerError::expression_statement_not_call(stmt.span)),
        }
    }

    fn analyze_declaration(&mut self, stmt: &DeclarationStmt) -> AnalyzerResult<TypedStmt> {
        let Some(type_name) = &stmt.type_name else {
            return self.analyze_inferred_declaration(stmt);
        };

        let ty = self
            .registry
            .get_type_by_name(type_name)
            .map(|def| def.ty)
            .ok_or_else(|| AnalyzerError::unknown_type(type_name, stmt.span))?;
        if ty == Type::Void {
            return Err(AnalyzerError::void_variable(&stmt.name, stmt.span));
        }

        // Defined before the initializer is analyzed.
        self.define(&stmt.name, ty, stmt.span)?;
        let value = stmt
            .value
            .as_ref()
            .map(|expr| self.analyze_value(expr, ty))
            .transpose()?;

        Ok(TypedStmt::Declaration {
            name: stmt.name.clone(),
            ty,
            value,
        })
    }

    /// `LET name = value;` takes the type of its initializer.
    fn analyze_inferred_declaration(&mut self, stmt: &DeclarationStmt) -> AnalyzerResult<TypedStmt> {
        let Some(expr) = &stmt.value else {
            return Err(AnalyzerError::missing_type(&stmt.name, stmt.span));
        };

        let value = self.analyze_expr(expr)?;
        let ty = value.ty();
        if ty == Type::Void {
            return Err(AnalyzerError::void_variable(&stmt.name, stmt.span));
        }
        self.define(&stmt.name, ty, stmt.span)?;

        Ok(TypedStmt::Declaration {
            name: stmt.name.clone(),
            ty,
            value: Some(value),
        })
    }

    fn analyze_assignment(&mut self, stmt: &AssignmentStmt) -> AnalyzerResult<TypedStmt> {
        let ty = self
            .scope
            .lookup(&stmt.name)
            .ok_or_else(|| AnalyzerError::undefined_variable(&stmt.name, stmt.span))?;
        let value = self.analyze_value(&stmt.value, ty)?;

        Ok(TypedStmt::Assignment {
            name: stmt.name.clone(),
            value,
        })
    }

    fn analyze_if(&mut self, stmt: &IfStmt) -> AnalyzerResult<TypedStmt> {
        let condition = self.analyze_condition(&stmt.condition)?;
        if stmt.then_stmts.is_empty() {
            return Err(AnalyzerError::empty_statements(stmt.span));
        }
        let then_stmts = self.analyze_block(&stmt.then_stmts)?;
        let else_stmts = self.analyze_block(&stmt.else_stmts)?;

        Ok(TypedStmt::If {
            condition,
            then_stmts,
            else_stmts,
        })
    }

    fn analyze_while(&mut self, stmt: &WhileStmt) -> AnalyzerResult<TypedStmt> {
        let condition = self.analyze_condition(&stmt.condition)?;
        let body = self.analyze_block(&stmt.body)?;

        Ok(TypedStmt::While { condition, body })
    }

    fn analyze_condition(&self, expr: &Expr) -> AnalyzerResult<TypedExpr> {
        let condition = self.analyze_expr(expr)?;
        if condition.ty() != Type::Boolean {
            return Err(AnalyzerError::condition_not_boolean(
                condition.ty(),
                expr.span(),
            ));
        }
        Ok(condition)
    }

    /// Analyze a value stored into a variable of type `target`.
    fn analyze_value(&self, expr: &Expr, target: Type) -> AnalyzerResult<TypedExpr> {
        let value = self.analyze_expr(expr)?;
        check_assignable(value.ty(), target, expr.span())?;
        Ok(value)
    }

    fn define(&mut self, name: &str, ty: Type, span: Span) -> AnalyzerResult<()> {
        if self.scope.define(name, ty) {
            Ok(())
        } else {
            Err(AnalyzerError::duplicate_variable(name, span))
        }
    }

    // ==================== EXPRESSIONS ====================

    /// Analyze an expression into its typed form.
    pub fn analyze_expr(&self, expr: &Expr) -> AnalyzerResult<TypedExpr> {
        match expr {
            Expr::Literal(lit) => self.analyze_literal(lit),
            Expr::Group(inner, span) => {
                let inner = self.analyze_expr(inner)?;
                let ty = inner.ty();
                Ok(TypedExpr::new(
                    TypedExprKind::Group(Box::new(inner)),
                    ty,
                    *span,
                ))
            }
            Expr::Binary(op, left, right, span) => self.analyze_binary(*op, left, right, *span),
            Expr::Var(name, span) => self.analyze_var(name, *span),
            Expr::FnCall(fc) => self.analyze_fn_call(fc),
        }
    }

    /// Narrow a literal to its native value, checking bounds and charset.
    fn analyze_literal(&self, lit: &Literal) -> AnalyzerResult<TypedExpr> {
        let value = match &lit.kind {
            LiteralKind::Bool(b) => Value::Bool(*b),
            LiteralKind::Integer(i) => Value::Integer(
                i.to_i32()
                    .ok_or_else(|| AnalyzerError::integer_too_large(i.digits(), lit.span))?,
            ),
            LiteralKind::Decimal(d) => Value::Decimal(
                d.to_f64()
                    .ok_or_else(|| AnalyzerError::decimal_too_large(d.text(), lit.span))?,
            ),
            LiteralKind::String(s) => {
                if !string_charset().is_match(s) {
                    return Err(AnalyzerError::invalid_string(s, lit.span));
                }
                Value::String(s.clone())
            }
        };

        let ty = value.ty();
        Ok(TypedExpr::new(TypedExprKind::Literal(value), ty, lit.span))
    }

    fn analyze_binary(
        &self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        span: Span,
    ) -> AnalyzerResult<TypedExpr> {
        let left = self.analyze_expr(left)?;
        let right = self.analyze_expr(right)?;

        let ty = binary_result(op, left.ty(), right.ty()).ok_or_else(|| {
            AnalyzerError::invalid_operator(op, left.ty(), right.ty(), span)
        })?;

        Ok(TypedExpr::new(
            TypedExprKind::Binary(op, Box::new(left), Box::new(right)),
            ty,
            span,
        ))
    }

    fn analyze_var(&self, name: &str, span: Span) -> AnalyzerResult<TypedExpr> {
        let ty = self
            .scope
            .lookup(name)
            .ok_or_else(|| AnalyzerError::undefined_variable(name, span))?;
        Ok(TypedExpr::new(TypedExprKind::Var(name.to_string()), ty, span))
    }

    /// Resolve `name/arity`, then check each argument against its parameter.
    fn analyze_fn_call(&self, fc: &FnCall) -> AnalyzerResult<TypedExpr> {
        let function = self
            .registry
            .get_function(&fc.name, fc.args.len())
            .ok_or_else(|| AnalyzerError::unknown_function(&fc.name, fc.args.len(), fc.span))?;

        let args = fc
            .args
            .iter()
            .map(|arg| self.analyze_expr(arg))
            .collect::<AnalyzerResult<Vec<_>>>()?;
        for (arg, &param) in args.iter().zip(&function.params) {
            check_assignable(arg.ty(), param, arg.span)?;
        }
        trace!(function = %function.signature(), target = %function.target_name, "resolved call");

        Ok(TypedExpr::new(
            TypedExprKind::Function {
                name: fc.name.clone(),
                target: function.target_name.clone(),
                args,
            },
            function.returns,
            fc.span,
        ))
    }
}
