//! PLC Analyzer
//!
//! Name resolution and type checking against the Registry.
//! Transforms the untyped AST into a typed AST with resolved types.

mod analyzer;
mod error;
mod scope;
mod typed;
mod types;

pub use analyzer::{analyze, Analyzer, AnalyzerOptions};
pub use error::{AnalyzerError, AnalyzerResult};
pub use scope::Scope;
pub use typed::*;
pub use types::*;
