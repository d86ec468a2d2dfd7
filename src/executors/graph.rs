//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::GraphOptions;
use crate::dependency_filter::ProjectFilter;
use crate::diagnostics::{ConsoleSink, DiagnosticSink};
use crate::discovery::{DescriptorLocator, GlobLocator};
use crate::executors::CommandExecutor;
use crate::graph::{DependencyGraphBuilder, GraphRenderer};
use crate::progress::{ProgressReporter, SuspendingSink};
use crate::solution_parser::SolutionParser;
use crate::utils::string::counted;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        // Create progress reporter if we're in an interactive terminal
        let progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };
        let console_sink = ConsoleSink::new(config.verbose);
        let sink = SuspendingSink::new(&console_sink, progress.as_ref());

        let descriptor = match config.solution.as_ref() {
            Some(path) => path.clone(),
            None => {
                if let Some(p) = &progress {
                    p.start_discovery();
                }
                GlobLocator::new()
                    .locate(&config.directory)
                    .wrap_err("Failed to find a solution file")?
            }
        };

        let solution = SolutionParser::new(&sink)
            .parse(&descriptor)
            .wrap_err_with(|| format!("Failed to read solution '{}'", descriptor.display()))?;

        sink.debug(&format!(
            "Using {} with project paths relative to {}",
            solution.descriptor_path().display(),
            solution.directory().display()
        ));
        if let Some(p) = &progress {
            p.finish_discovery(&solution.name(), solution.projects().len());
        }

        let mut builder = DependencyGraphBuilder::with_filter(ProjectFilter::from(&config));
        builder.build(&solution, &sink, progress.as_ref());

        if !builder.skipped_tests().is_empty() {
            sink.info(&format!(
                "Skipped {}, use --with-tests to include them",
                counted("test project", builder.skipped_tests().len())
            ));
        }

        if builder.graph().is_empty() {
            sink.warn("No references between projects of this solution were found");
        } else {
            sink.debug(&format!(
                "Graph has {} between {}",
                counted("dependency", builder.graph().edges().len()),
                counted("project", builder.graph().nodes().len())
            ));
        }

        let renderer = GraphRenderer::new(solution.name());

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref() {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        renderer
            .write(builder.graph(), config.format, output_writer.as_mut())
            .wrap_err_with(|| format!("Failed to emit {:?} graph", config.format))?;

        if !builder.failures().is_empty() {
            sink.warn(&format!(
                "{} left out of the graph",
                counted("project", builder.failures().len())
            ));
        }

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
