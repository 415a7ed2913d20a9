//! Abstract Syntax Tree types produced by the parser.
//!
//! Expression nodes carry no type; the analyzer produces a typed copy.

use std::cmp::Ordering;
use std::fmt;

/// Source location for error reporting (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A whole program: statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Source {
    pub stmts: Vec<Stmt>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(ExprStmt),
    Declaration(DeclarationStmt),
    Assignment(AssignmentStmt),
    If(IfStmt),
    While(WhileStmt),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Expr(s) => s.span,
            Stmt::Declaration(s) => s.span,
            Stmt::Assignment(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
        }
    }
}

/// `expr ;`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

/// `LET name (: TYPE)? (= value)? ;`
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationStmt {
    pub name: String,
    pub type_name: Option<String>,
    pub value: Option<Expr>,
    pub span: Span,
}

/// `name = value ;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub name: String,
    pub value: Expr,
    pub span: Span,
}

/// `IF condition THEN ... (ELSE ...)? END`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_stmts: Vec<Stmt>,
    pub else_stmts: Vec<Stmt>,
    pub span: Span,
}

/// `WHILE condition DO ... END`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Group(Box<Expr>, Span),
    Binary(BinaryOp, Box<Expr>, Box<Expr>, Span),
    Var(String, Span),
    FnCall(FnCall),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(lit) => lit.span,
            Expr::Group(_, span) => *span,
            Expr::Binary(_, _, _, span) => *span,
            Expr::Var(_, span) => *span,
            Expr::FnCall(fc) => fc.span,
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    NotEq,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Map an operator token's text to an operator.
    pub fn from_symbol(symbol: &str) -> Option<BinaryOp> {
        match symbol {
            "==" => Some(BinaryOp::Eq),
            "!=" => Some(BinaryOp::NotEq),
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// The operator as written in source.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A function call: `name(args...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FnCall {
    pub name: String,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub span: Span,
}

/// Literal value kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralKind {
    Bool(bool),
    Integer(IntegerLiteral),
    Decimal(DecimalLiteral),
    /// String contents without the surrounding quotes.
    String(String),
}

/// An integer literal of unbounded size, kept as its decimal digits.
///
/// Range checking happens during analysis; the parser accepts any length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral(String);

impl IntegerLiteral {
    /// Create from ASCII digits. Returns `None` for an empty or non-digit string.
    pub fn new(digits: impl Into<String>) -> Option<Self> {
        let digits = digits.into();
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(digits))
        } else {
            None
        }
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Narrow to a 32-bit signed integer, or `None` if the value does not fit.
    pub fn to_i32(&self) -> Option<i32> {
        // Digits only, so overflow is the only possible failure.
        self.0.parse::<i32>().ok()
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A decimal literal of unbounded size and precision, kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalLiteral(String);

impl DecimalLiteral {
    /// Create from `digits.digits`. Returns `None` for any other shape.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        let (whole, fraction) = text.split_once('.')?;
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if is_digits(whole) && is_digits(fraction) {
            Some(Self(text))
        } else {
            None
        }
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Narrow to a 64-bit float, or `None` if the exact value exceeds `f64::MAX`.
    ///
    /// The bound is checked on the digit text, so a value just above
    /// `f64::MAX` that would round down to it is still rejected.
    pub fn to_f64(&self) -> Option<f64> {
        if self.exceeds_f64_max() {
            return None;
        }
        self.0.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    fn exceeds_f64_max(&self) -> bool {
        let (whole, fraction) = self.0.split_once('.').unwrap_or((self.0.as_str(), ""));
        let whole = whole.trim_start_matches('0');
        // Exact decimal expansion of f64::MAX, an integer with 309 digits.
        let max = format!("{:.0}", f64::MAX);

        match whole.len().cmp(&max.len()).then_with(|| whole.cmp(max.as_str())) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => fraction.bytes().any(|b| b != b'0'),
        }
    }
}

impl fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
