//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::SlnGraphError;

impl FromCommand for GraphOptions {
    fn from_command(command: Cli) -> Result<Self, SlnGraphError> {
        let directory = command.resolved_directory();
        let Cli {
            with_tests,
            verbose,
            solution,
            format,
            output,
            ..
        } = command;

        GraphOptions::builder()
            .with_directory(directory)
            .with_solution(solution)
            .with_include_tests(with_tests)
            .with_verbose(verbose)
            .with_format(format)
            .with_output(output)
            .build()
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command for a solution
pub fn execute_graph_command(command: Cli) -> Result<()> {
    let config = GraphOptions::from_command(command)
        .wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
