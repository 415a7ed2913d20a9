//! PLC Compiler
//!
//! Drives the whole pipeline from source text to Java-like target text.
//!
//! Responsibilities:
//! - Lex and parse source text
//! - Analyze the tree against the Registry
//! - Render the typed tree as a `Main` class

mod compiler;
mod error;
mod generator;

pub use compiler::{compile, Compiler};
pub use error::{CompileError, CompileResult};
pub use generator::{Generator, GeneratorOptions};
