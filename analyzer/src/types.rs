//! Type relations: assignability and operator result types.

use crate::{AnalyzerError, AnalyzerResult};
use plc_parser::{BinaryOp, Span};

pub use plc_registry::Type;

/// Whether a value of type `source` may flow into a slot of type `target`.
///
/// True for identical types, for INTEGER into DECIMAL, and for any
/// non-VOID type into ANY.
pub fn is_assignable(source: Type, target: Type) -> bool {
    source == target
        || (source == Type::Integer && target == Type::Decimal)
        || (source != Type::Void && target == Type::Any)
}

/// Like [`is_assignable`], but fails with an error located at `span`.
pub fn check_assignable(source: Type, target: Type, span: Span) -> AnalyzerResult<()> {
    if is_assignable(source, target) {
        Ok(())
    } else {
        Err(AnalyzerError::not_assignable(source, target, span))
    }
}

/// Result type of `left op right`, or `None` if the operands are invalid.
pub fn binary_result(op: BinaryOp, left: Type, right: Type) -> Option<Type> {
    match op {
        BinaryOp::Eq | BinaryOp::NotEq => {
            (left != Type::Void && right != Type::Void).then_some(Type::Boolean)
        }
        // `+` concatenates when a string participates.
        BinaryOp::Add
            if (left == Type::String && right != Type::Void)
                || (right == Type::String && left != Type::Void) =>
        {
            Some(Type::String)
        }
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => numeric_result(left, right),
    }
}

/// INTEGER when both sides are INTEGER, DECIMAL for any other numeric pair.
fn numeric_result(left: Type, right: Type) -> Option<Type> {
    if !(left.is_numeric() && right.is_numeric()) {
        return None;
    }
    if left == Type::Integer && right == Type::Integer {
        Some(Type::Integer)
    } else {
        Some(Type::Decimal)
    }
}
