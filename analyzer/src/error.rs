//! Analyzer error types.

use crate::Type;
use plc_parser::{BinaryOp, Span};
use thiserror::Error;

/// Errors that can occur during analysis.
///
/// Every variant carries the byte offset of the offending node.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerError {
    /// Integer literal outside the 32-bit signed range.
    #[error("Integer literal {literal} is too large at offset {offset}")]
    IntegerTooLarge { literal: String, offset: usize },

    /// Decimal literal outside the finite 64-bit float range.
    #[error("Decimal literal {literal} is too large at offset {offset}")]
    DecimalTooLarge { literal: String, offset: usize },

    /// String literal with a character outside the allowed set.
    #[error("Invalid string \"{literal}\" at offset {offset}")]
    InvalidString { literal: String, offset: usize },

    #[error("Variable '{name}' is not defined at offset {offset}")]
    UndefinedVariable { name: String, offset: usize },

    #[error("Variable '{name}' is already defined in this scope at offset {offset}")]
    DuplicateVariable { name: String, offset: usize },

    #[error("Unknown type '{name}' at offset {offset}")]
    UnknownType { name: String, offset: usize },

    /// No function registered under this name and arity.
    #[error("Function {name}/{arity} has not been defined at offset {offset}")]
    UnknownFunction {
        name: String,
        arity: usize,
        offset: usize,
    },

    #[error("Type of variable '{name}' cannot be Void at offset {offset}")]
    VoidVariable { name: String, offset: usize },

    /// Declaration with neither a type nor an initializer.
    #[error("Variable '{name}' needs a type or an initial value at offset {offset}")]
    MissingType { name: String, offset: usize },

    #[error("Type {actual} is not assignable to {expected} at offset {offset}")]
    NotAssignable {
        actual: Type,
        expected: Type,
        offset: usize,
    },

    #[error("Condition must be BOOLEAN, got {actual} at offset {offset}")]
    ConditionNotBoolean { actual: Type, offset: usize },

    #[error("Statements list is empty at offset {offset}")]
    EmptyStatements { offset: usize },

    #[error("Invalid operator '{op}' for types {left} and {right} at offset {offset}")]
    InvalidOperator {
        op: BinaryOp,
        left: Type,
        right: Type,
        offset: usize,
    },

    #[error("Expression statement must be a function call at offset {offset}")]
    ExpressionStatementNotCall { offset: usize },
}

impl AnalyzerError {
    pub fn integer_too_large(literal: impl Into<String>, span: Span) -> Self {
        Self::IntegerTooLarge {
            literal: literal.into(),
            offset: span.start,
        }
    }

    pub fn decimal_too_large(literal: impl Into<String>, span: Span) -> Self {
        Self::DecimalTooLarge {
            literal: literal.into(),
            offset: span.start,
        }
    }

    pub fn invalid_string(literal: impl Into<String>, span: Span) -> Self {
        Self::InvalidString {
            literal: literal.into(),
            offset: span.start,
        }
    }

    pub fn undefined_variable(name: impl Into<String>, span: Span) -> Self {
        Self::UndefinedVariable {
            name: name.into(),
            offset: span.start,
        }
    }

    pub fn duplicate_variable(name: impl Into<String>, span: Span) -> Self {
        Self::DuplicateVariable {
            name: name.into(),
            offset: span.start,
        }
    }

    pub fn unknown_type(name: impl Into<String>, span: Span) -> Self {
        Self::UnknownType {
            name: name.into(),
            offset: span.start,
        }
    }

    pub fn unknown_function(name: impl Into<String>, arity: usize, span: Span) -> Self {
        Self::UnknownFunction {
            name: name.into(),
            arity,
            offset: span.start,
        }
    }

    pub fn void_variable(name: impl Into<String>, span: Span) -> Self {
        Self::VoidVariable {
            name: name.into(),
            offset: span.start,
        }
    }

    pub fn missing_type(name: impl Into<String>, span: Span) -> Self {
        Self::MissingType {
            name: name.into(),
            offset: span.start,
        }
    }

    pub fn not_assignable(actual: Type, expected: Type, span: Span) -> Self {
        Self::NotAssignable {
            actual,
            expected,
            offset: span.start,
        }
    }

    pub fn condition_not_boolean(actual: Type, span: Span) -> Self {
        Self::ConditionNotBoolean {
            actual,
            offset: span.start,
        }
    }

    pub fn empty_statements(span: Span) -> Self {
        Self::EmptyStatements { offset: span.start }
    }

    pub fn invalid_operator(op: BinaryOp, left: Type, right: Type, span: Span) -> Self {
        Self::InvalidOperator {
            op,
            left,
            right,
            offset: span.start,
        }
    }

    pub fn expression_statement_not_call(span: Span) -> Self {
        Self::ExpressionStatementNotCall { offset: span.start }
    }

    /// Byte offset of the node that caused the error.
    pub fn offset(&self) -> usize {
        match self {
            Self::IntegerTooLarge { offset, .. }
            | Self::DecimalTooLarge { offset, .. }
            | Self::InvalidString { offset, .. }
            | Self::UndefinedVariable { offset, .. }
            | Self::DuplicateVariable { offset, .. }
            | Self::UnknownType { offset, .. }
            | Self::UnknownFunction { offset, .. }
            | Self::VoidVariable { offset, .. }
            | Self::MissingType { offset, .. }
            | Self::NotAssignable { offset, .. }
            | Self::ConditionNotBoolean { offset, .. }
            | Self::EmptyStatements { offset }
            | Self::InvalidOperator { offset, .. }
            | Self::ExpressionStatementNotCall { offset } => *offset,
        }
    }
}

/// Result type for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
