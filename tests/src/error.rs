//! Error types for the test framework.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scenario operations.
pub type ExampleResult<T> = Result<T, ExampleError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ExampleError {
    /// Failed to read a file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a programs file.
    #[error("failed to parse programs file '{path}': {message}")]
    ProgramsParse { path: PathBuf, message: String },

    #[error("assertion failed for step '{step}': {message}")]
    AssertionFailed { step: String, message: String },

    #[error("step '{step}' not found in programs file")]
    StepNotFound { step: String },

    /// Scenario has neither a programs file nor inline programs.
    #[error("no programs given for scenario '{scenario}'")]
    MissingPrograms { scenario: String },
}

impl ExampleError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn programs_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ProgramsParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn step_not_found(step: impl Into<String>) -> Self {
        Self::StepNotFound { step: step.into() }
    }

    pub fn missing_programs(scenario: impl Into<String>) -> Self {
        Self::MissingPrograms {
            scenario: scenario.into(),
        }
    }
}
