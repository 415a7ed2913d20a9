//! Type and function descriptors.

use std::fmt;

/// A built-in type of the language.
///
/// Types are compared by identity: two values are the same type exactly when
/// they are the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Boolean,
    Integer,
    Decimal,
    String,
    /// Top type: every non-void value may flow into it.
    Any,
    /// Result of calls that produce no value.
    Void,
}

impl Type {
    /// All built-in types, in registration order.
    pub const ALL: [Type; 6] = [
        Type::Boolean,
        Type::Integer,
        Type::Decimal,
        Type::String,
        Type::Any,
        Type::Void,
    ];

    /// Get the source-level name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Boolean => "BOOLEAN",
            Type::Integer => "INTEGER",
            Type::Decimal => "DECIMAL",
            Type::String => "STRING",
            Type::Any => "ANY",
            Type::Void => "VOID",
        }
    }

    /// Check if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Integer | Type::Decimal)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type registered under a source name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    /// The type this entry resolves to.
    pub ty: Type,
    /// Name used in declarations (`LET x : INTEGER`).
    pub name: String,
    /// Name rendered by the generator (`int`).
    pub target_name: String,
}

impl TypeDef {
    pub fn new(ty: Type, name: impl Into<String>, target_name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
            target_name: target_name.into(),
        }
    }
}

/// A built-in function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// Name used at call sites.
    pub name: String,
    /// Call rendered by the generator.
    pub target_name: String,
    /// Parameter types in declaration order.
    pub params: Vec<Type>,
    /// Type of the call expression.
    pub returns: Type,
}

impl FunctionDef {
    /// Number of parameters; part of the lookup key.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Signature string used in diagnostics, e.g. `PRINT/1`.
    pub fn signature(&self) -> String {
        format!("{}/{}", self.name, self.arity())
    }
}
