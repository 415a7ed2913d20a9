//! RegistryBuilder for constructing an immutable Registry.

use crate::{FunctionDef, Registry, Type, TypeDef};
use std::collections::HashMap;
use thiserror::Error;
use tracing::trace;

/// Errors that can occur during registry construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate registration of type {0}")]
    DuplicateTypeName(String),

    #[error("Duplicate registration of function {name}/{arity}")]
    DuplicateFunction { name: String, arity: usize },
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Types in registration order.
    types: Vec<TypeDef>,
    /// Type index by source name.
    type_names: HashMap<String, usize>,
    /// Functions by `(name, arity)`.
    functions: HashMap<(String, usize), FunctionDef>,
}

impl RegistryBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder pre-populated with the built-in types and functions.
    pub fn standard() -> Result<Self, RegistryError> {
        let mut builder = Self::new();
        builder.add_type(Type::Boolean, "BOOLEAN", "boolean")?;
        builder.add_type(Type::Integer, "INTEGER", "int")?;
        builder.add_type(Type::Decimal, "DECIMAL", "double")?;
        builder.add_type(Type::String, "STRING", "String")?;
        builder.add_type(Type::Any, "ANY", "Object")?;
        builder.add_type(Type::Void, "VOID", "Void")?;
        builder
            .add_function("PRINT")
            .param(Type::Any)
            .returns(Type::Void)
            .target("System.out.println")
            .done()?;
        Ok(builder)
    }

    /// Register a type under a source name.
    pub fn add_type(
        &mut self,
        ty: Type,
        name: impl Into<String>,
        target_name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let def = TypeDef::new(ty, name, target_name);
        if self.type_names.contains_key(&def.name) {
            return Err(RegistryError::DuplicateTypeName(def.name));
        }
        trace!(name = %def.name, target = %def.target_name, "registered type");
        self.type_names.insert(def.name.clone(), self.types.len());
        self.types.push(def);
        Ok(())
    }

    /// Start registering a function. The target name defaults to `name`.
    pub fn add_function(&mut self, name: impl Into<String>) -> FunctionBuilder<'_> {
        let name = name.into();
        FunctionBuilder {
            builder: self,
            target_name: name.clone(),
            name,
            params: Vec::new(),
            returns: Type::Void,
        }
    }

    /// Build the immutable registry.
    pub fn build(self) -> Registry {
        Registry::new(self.types, self.type_names, self.functions)
    }
}

/// Builder for a function signature.
pub struct FunctionBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    name: String,
    target_name: String,
    params: Vec<Type>,
    returns: Type,
}

impl<'a> FunctionBuilder<'a> {
    /// Append a parameter.
    pub fn param(mut self, ty: Type) -> Self {
        self.params.push(ty);
        self
    }

    /// Set the return type (default VOID).
    pub fn returns(mut self, ty: Type) -> Self {
        self.returns = ty;
        self
    }

    /// Set the call rendered by the generator.
    pub fn target(mut self, target_name: impl Into<String>) -> Self {
        self.target_name = target_name.into();
        self
    }

    /// Finish building this function.
    pub fn done(self) -> Result<(), RegistryError> {
        let key = (self.name, self.params.len());
        if self.builder.functions.contains_key(&key) {
            return Err(RegistryError::DuplicateFunction {
                name: key.0,
                arity: key.1,
            });
        }

        let def = FunctionDef {
            name: key.0.clone(),
            target_name: self.target_name,
            params: self.params,
            returns: self.returns,
        };
        trace!(signature = %def.signature(), target = %def.target_name, "registered function");
        self.builder.functions.insert(key, def);
        Ok(())
    }
}
