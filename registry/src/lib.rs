//! PLC Registry
//!
//! The fixed catalogue of built-in types and functions:
//! - Type descriptors keyed by name
//! - Function descriptors keyed by `(name, arity)`
//! - Target-side rendering names used by the generator
//!
//! A `Registry` is built once through `RegistryBuilder` and is read-only
//! afterwards, so it can be shared by any number of analysis runs.

mod builder;
mod registry;
mod types;

pub use builder::{FunctionBuilder, RegistryBuilder, RegistryError};
pub use registry::Registry;
pub use types::*;
