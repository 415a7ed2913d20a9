//! Compiler error types.

use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// Lexing or parsing failed.
    #[error(transparent)]
    Parse(#[from] plc_parser::ParseError),

    /// The tree did not type check.
    #[error("Analysis error: {0}")]
    Analyze(#[from] plc_analyzer::AnalyzerError),
}

impl CompileError {
    /// Byte offset in the source where compilation failed.
    pub fn offset(&self) -> usize {
        match self {
            Self::Parse(err) => err.offset,
            Self::Analyze(err) => err.offset(),
        }
    }
}

/// Result type for compiler operations.
pub type CompileResult<T> = Result<T, CompileError>;
