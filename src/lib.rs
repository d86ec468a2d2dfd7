//! # sln-graph - Draw Project Dependencies of .NET Solutions
//!
//! sln-graph reads a Visual Studio solution file, follows the
//! `ProjectReference` entries of every C# project it declares and renders the
//! references between projects of that solution as a diagram.
//!
//! ## Main Components
//!
//! - **Discovery**: Finds the single solution file of a directory
//! - **Solution parser**: Reads project declarations from a `.sln` file
//! - **Manifest parser**: Extracts project references from a `.csproj` file
//! - **Graph**: Builds the internal dependency mapping and renders it as
//!   Mermaid, DOT or JSON
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use sln_graph::diagnostics::ConsoleSink;
//! use sln_graph::discovery::{DescriptorLocator, GlobLocator};
//! use sln_graph::graph::{DependencyGraphBuilder, GraphRenderer};
//! use sln_graph::solution_parser::SolutionParser;
//!
//! # fn main() -> miette::Result<()> {
//! let sink = ConsoleSink::new(false);
//!
//! let descriptor = GlobLocator::new().locate(Path::new("/path/to/repo"))?;
//! let solution = SolutionParser::new(&sink).parse(&descriptor)?;
//!
//! // Test projects are skipped unless requested
//! let mut builder = DependencyGraphBuilder::new(false);
//! let graph = builder.build(&solution, &sink, None);
//!
//! print!("{}", GraphRenderer::new(solution.name()).mermaid(graph));
//!
//! for failure in builder.failures() {
//!     eprintln!("{} was left out: {}", failure.project, failure.error);
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod dependency_filter;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod executors;
pub mod graph;
pub mod manifest_parser;
pub mod solution_parser;

pub use common::ConfigBuilder;
pub use error::SlnGraphError;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    execute_command(Cli::parse())
}
