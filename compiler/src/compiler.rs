//! Main compiler implementation.

use crate::{CompileResult, Generator, GeneratorOptions};
use plc_analyzer::{Analyzer, AnalyzerOptions, TypedSource};
use plc_parser::parse;
use plc_registry::Registry;
use tracing::debug;

/// The Compiler runs source text through parsing, analysis and generation.
pub struct Compiler<'r> {
    registry: &'r Registry,
    analyzer_options: AnalyzerOptions,
    generator_options: GeneratorOptions,
}

impl<'r> Compiler<'r> {
    /// Create a compiler with default options.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            analyzer_options: AnalyzerOptions::default(),
            generator_options: GeneratorOptions::default(),
        }
    }

    pub fn with_analyzer_options(mut self, options: AnalyzerOptions) -> Self {
        self.analyzer_options = options;
        self
    }

    pub fn with_generator_options(mut self, options: GeneratorOptions) -> Self {
        self.generator_options = options;
        self
    }

    /// Parse and analyze source text without generating output.
    pub fn check(&self, input: &str) -> CompileResult<TypedSource> {
        let source = parse(input)?;
        let typed = Analyzer::new(self.registry)
            .with_options(self.analyzer_options)
            .analyze_source(&source)?;
        Ok(typed)
    }

    /// Compile source text into target text.
    pub fn compile(&self, input: &str) -> CompileResult<String> {
        let typed = self.check(input)?;
        let output = Generator::new(self.registry)
            .with_options(self.generator_options.clone())
            .generate(&typed);
        debug!(input = input.len(), output = output.len(), "compiled");
        Ok(output)
    }
}

/// Compile source text with default options.
pub fn compile(input: &str, registry: &Registry) -> CompileResult<String> {
    Compiler::new(registry).compile(input)
}
