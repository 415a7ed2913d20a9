//! Scenario definition and builder.

use std::path::{Path, PathBuf};

use plc_analyzer::AnalyzerOptions;

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::{ExampleError, ExampleResult};
use crate::loader::Programs;
use crate::runner::Runner;

/// A step in a scenario with its assertion.
#[derive(Debug)]
pub struct Step {
    /// Step name (matches `--# name` in the programs file).
    pub name: String,
    /// Assertion to verify the result.
    pub assertion: Assertion,
}

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Path to the programs file.
    programs_path: Option<PathBuf>,
    /// Parsed programs (if loaded inline).
    programs: Option<Programs>,
    /// Steps with assertions.
    steps: Vec<Step>,
    /// Base path for resolving relative paths.
    base_path: PathBuf,
    analyzer_options: AnalyzerOptions,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            programs_path: None,
            programs: None,
            steps: Vec::new(),
            base_path: programs_root(),
            analyzer_options: AnalyzerOptions::default(),
        }
    }

    /// Set the base path for resolving relative paths.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the programs file path (relative to `programs/`).
    pub fn programs(mut self, path: impl Into<PathBuf>) -> Self {
        self.programs_path = Some(path.into());
        self
    }

    /// Load programs from a string.
    pub fn programs_source(mut self, source: &str) -> ExampleResult<Self> {
        self.programs = Some(Programs::parse(source)?);
        Ok(self)
    }

    /// Analyze IF/WHILE bodies in their own scope.
    pub fn block_scopes(mut self) -> Self {
        self.analyzer_options.block_scopes = true;
        self
    }

    /// Add a step with an assertion.
    ///
    /// The step name must match a `--# name` marker in the programs file.
    pub fn step<F>(mut self, name: impl Into<String>, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let name = name.into();
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step { name, assertion });
        self
    }

    /// Run the scenario and return the result.
    pub fn run(&self) -> ExampleResult<()> {
        let runner = Runner::new(self)?;
        runner.run()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn analyzer_options(&self) -> AnalyzerOptions {
        self.analyzer_options
    }

    /// Get the programs, loading from file if needed.
    pub fn load_programs(&self) -> ExampleResult<Programs> {
        if let Some(ref programs) = self.programs {
            return Ok(programs.clone());
        }

        match &self.programs_path {
            Some(p) => Programs::load(&self.resolve_path(p)),
            None => Err(ExampleError::missing_programs(&self.name)),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Resolve a path relative to the base path.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

/// The `programs/` directory of this crate.
fn programs_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("programs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("test")
            .programs("level-1/basics.plc")
            .step("declare", |a| a.compiles())
            .step("print", |a| a.emits("System.out.println(1);"));

        assert_eq!(scenario.name(), "test");
        assert_eq!(scenario.steps().len(), 2);
        assert_eq!(scenario.steps()[0].name, "declare");
        assert_eq!(scenario.steps()[1].name, "print");
        assert!(!scenario.analyzer_options().block_scopes);
    }

    #[test]
    fn test_missing_programs() {
        let scenario = Scenario::new("nothing");

        assert!(matches!(
            scenario.load_programs(),
            Err(ExampleError::MissingPrograms { .. })
        ));
    }

    #[test]
    fn test_missing_programs_file() {
        let scenario = Scenario::new("missing").programs("level-9/nope.plc");

        assert!(matches!(
            scenario.load_programs(),
            Err(ExampleError::FileRead { .. })
        ));
    }
}
