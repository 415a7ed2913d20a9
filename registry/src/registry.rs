//! The Registry - immutable type and function lookup.

use crate::{FunctionDef, RegistryBuilder, Type, TypeDef};
use std::collections::HashMap;

/// The Registry provides lookup of built-in types and functions.
/// It is immutable after construction.
#[derive(Debug)]
pub struct Registry {
    /// Type definitions in registration order.
    types: Vec<TypeDef>,
    /// Type index lookup by name.
    type_names: HashMap<String, usize>,
    /// Function definitions by `(name, arity)`.
    functions: HashMap<(String, usize), FunctionDef>,
}

impl Registry {
    pub(crate) fn new(
        types: Vec<TypeDef>,
        type_names: HashMap<String, usize>,
        functions: HashMap<(String, usize), FunctionDef>,
    ) -> Self {
        Self {
            types,
            type_names,
            functions,
        }
    }

    /// The registry of built-in types and the `PRINT` function.
    ///
    /// # Panics
    ///
    /// Panics if the built-in entries collide, which is a programming error.
    pub fn standard() -> Self {
        RegistryBuilder::standard()
            .expect("built-in registry entries are unique")
            .build()
    }

    // ==================== Type Lookups ====================

    /// Get a type definition by its source name.
    pub fn get_type_by_name(&self, name: &str) -> Option<&TypeDef> {
        self.type_names.get(name).map(|&i| &self.types[i])
    }

    /// Get the first definition registered for a type.
    pub fn get_type(&self, ty: Type) -> Option<&TypeDef> {
        self.types.iter().find(|def| def.ty == ty)
    }

    /// Get the generator-side name of a type, falling back to its source name.
    pub fn target_type_name(&self, ty: Type) -> &str {
        self.get_type(ty)
            .map(|def| def.target_name.as_str())
            .unwrap_or_else(|| ty.name())
    }

    // ==================== Function Lookups ====================

    /// Get a function by name and number of arguments.
    pub fn get_function(&self, name: &str, arity: usize) -> Option<&FunctionDef> {
        self.functions.get(&(name.to_string(), arity))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
