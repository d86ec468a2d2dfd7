use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "sln-graph",
    about = "Draw the internal project dependencies of a .NET solution",
    long_about = "sln-graph reads the projects declared in a solution (.sln) file, collects \
                  the ProjectReference entries of each project manifest (.csproj) and prints \
                  the references between projects of the same solution as a diagram. References \
                  to projects outside the solution are left out, and test projects are skipped \
                  unless --with-tests is given.",
    version
)]
pub struct Cli {
    /// Directory containing the solution file
    #[arg(
        value_name = "DIRECTORY",
        default_value = ".",
        env = "SLN_GRAPH_DIRECTORY"
    )]
    pub directory: PathBuf,

    /// Include test projects and their dependencies
    #[arg(long, env = "SLN_GRAPH_WITH_TESTS")]
    pub with_tests: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long, env = "SLN_GRAPH_VERBOSE")]
    pub verbose: bool,

    /// Solution file to read instead of searching DIRECTORY for one
    #[arg(short, long, value_name = "FILE", env = "SLN_GRAPH_SOLUTION")]
    pub solution: Option<PathBuf>,

    /// Diagram format
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_FORMAT,
        env = "SLN_GRAPH_FORMAT"
    )]
    pub format: GraphFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE", env = "SLN_GRAPH_OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    /// Mermaid flowchart
    Mermaid,
    /// Graphviz DOT
    Dot,
    /// JSON nodes and edges
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sln-graph"]).unwrap();

        assert_eq!(cli.directory, PathBuf::from("."));
        assert!(!cli.with_tests);
        assert!(!cli.verbose);
        assert_eq!(cli.solution, None);
        assert_eq!(cli.format, GraphFormat::Mermaid);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "sln-graph",
            "repo",
            "--with-tests",
            "--verbose",
            "--solution",
            "repo/Shop.sln",
            "--format",
            "dot",
            "-o",
            "graph.dot",
        ])
        .unwrap();

        assert_eq!(cli.directory, PathBuf::from("repo"));
        assert!(cli.with_tests);
        assert!(cli.verbose);
        assert_eq!(cli.solution, Some(PathBuf::from("repo/Shop.sln")));
        assert_eq!(cli.format, GraphFormat::Dot);
        assert_eq!(cli.output, Some(PathBuf::from("graph.dot")));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["sln-graph", "--format", "d2"]).is_err());
    }
}
