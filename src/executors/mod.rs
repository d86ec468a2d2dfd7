//! Executors run a command once its configuration has been assembled
//!
//! [`graph::GraphExecutor`] drives the whole pipeline: locate the solution,
//! parse it, read every manifest, render the diagram.

pub mod graph;

use miette::Result;

/// Runs one command from its validated configuration
pub trait CommandExecutor {
    type Config;

    fn execute(config: Self::Config) -> Result<()>;
}
