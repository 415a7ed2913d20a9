//! Typed AST produced by the analyzer.
//!
//! Same shape as the parser's tree, but every expression carries its
//! resolved [`Type`] and literals are narrowed to native values.

use crate::Type;
use plc_parser::{BinaryOp, Span};
use std::fmt;

/// A fully analyzed program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypedSource {
    pub stmts: Vec<TypedStmt>,
}

/// An analyzed statement.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedStmt {
    /// A call evaluated for its side effects.
    Expr(TypedExpr),
    /// The value, when present, is already known to be assignable to `ty`.
    Declaration {
        name: String,
        ty: Type,
        value: Option<TypedExpr>,
    },
    Assignment {
        name: String,
        value: TypedExpr,
    },
    If {
        condition: TypedExpr,
        then_stmts: Vec<TypedStmt>,
        else_stmts: Vec<TypedStmt>,
    },
    While {
        condition: TypedExpr,
        body: Vec<TypedStmt>,
    },
}

/// An analyzed expression.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpr {
    pub kind: TypedExprKind,
    pub ty: Type,
    pub span: Span,
}

impl TypedExpr {
    pub fn new(kind: TypedExprKind, ty: Type, span: Span) -> Self {
        Self { kind, ty, span }
    }

    pub fn ty(&self) -> Type {
        self.ty
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedExprKind {
    Literal(Value),
    Group(Box<TypedExpr>),
    /// Keeps the source operator; only the result type is added.
    Binary(BinaryOp, Box<TypedExpr>, Box<TypedExpr>),
    Var(String),
    /// A call rewritten to the registry's target name.
    Function {
        name: String,
        target: String,
        args: Vec<TypedExpr>,
    },
}

/// A literal narrowed to its native representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Integer(i32),
    Decimal(f64),
    String(String),
}

impl Value {
    pub fn ty(&self) -> Type {
        match self {
            Value::Bool(_) => Type::Boolean,
            Value::Integer(_) => Type::Integer,
            Value::Decimal(_) => Type::Decimal,
            Value::String(_) => Type::String,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            // `{:?}` keeps a fractional part on whole values (`2.0`, not `2`).
            Value::Decimal(d) => write!(f, "{:?}", d),
            Value::String(s) => write!(f, "\"{}\"", s),
        }
    }
}
