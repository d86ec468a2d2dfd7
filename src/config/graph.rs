//! Graph command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::ConfigBuilder;
use crate::error::SlnGraphError;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    /// Directory searched for a solution file
    pub directory: PathBuf,
    /// Explicit solution file, bypassing the directory search
    pub solution: Option<PathBuf>,
    pub include_tests: bool,
    pub verbose: bool,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    directory: Option<PathBuf>,
    solution: Option<Option<PathBuf>>,
    include_tests: Option<bool>,
    verbose: Option<bool>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, directory: PathBuf) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_solution(mut self, solution: Option<PathBuf>) -> Self {
        self.solution = Some(solution);
        self
    }

    pub fn with_include_tests(mut self, include_tests: bool) -> Self {
        self.include_tests = Some(include_tests);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }
}

fn missing(field: &str) -> SlnGraphError {
    SlnGraphError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, SlnGraphError> {
        Ok(GraphOptions {
            directory: self.directory.ok_or_else(|| missing("directory"))?,
            solution: self.solution.ok_or_else(|| missing("solution"))?,
            include_tests: self.include_tests.ok_or_else(|| missing("include_tests"))?,
            verbose: self.verbose.ok_or_else(|| missing("verbose"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            output: self.output.ok_or_else(|| missing("output"))?,
        })
    }
}
