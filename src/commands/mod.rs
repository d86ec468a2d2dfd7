//! Command implementations for the sln-graph CLI

pub mod graph;

use miette::Result;

use crate::cli::Cli;

/// Execute a command based on CLI input
pub fn execute_command(command: Cli) -> Result<()> {
    graph::execute_graph_command(command)
}
