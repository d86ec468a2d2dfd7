use std::collections::BTreeSet;

use super::types::{DependencyGraph, ManifestFailure};
use crate::core::{Project, Solution};
use crate::dependency_filter::ProjectFilter;
use crate::diagnostics::DiagnosticSink;
use crate::manifest_parser::{ManifestParser, ReferenceReader};
use crate::progress::ProgressReporter;

/// Builder for constructing dependency graphs
///
/// Reads the manifest of every in-scope project of a solution and keeps the
/// references that resolve to other projects of the same solution. A
/// manifest that fails to parse is recorded as a [`ManifestFailure`] and its
/// project is left out of the graph; the remaining projects are unaffected.
pub struct DependencyGraphBuilder {
    graph: DependencyGraph,
    filter: ProjectFilter,
    failures: Vec<ManifestFailure>,
    skipped_tests: Vec<String>,
}

impl DependencyGraphBuilder {
    /// Create a new dependency graph builder
    ///
    /// # Arguments
    /// * `include_tests` - Parse test projects and emit their edges
    pub fn new(include_tests: bool) -> Self {
        Self::with_filter(ProjectFilter::new(include_tests))
    }

    pub fn with_filter(filter: ProjectFilter) -> Self {
        Self {
            graph: DependencyGraph::new(),
            filter,
            failures: Vec::new(),
            skipped_tests: Vec::new(),
        }
    }

    /// Build the graph by reading manifests from disk
    pub fn build(
        &mut self,
        solution: &Solution,
        sink: &dyn DiagnosticSink,
        progress: Option<&ProgressReporter>,
    ) -> &DependencyGraph {
        self.build_with(solution, &ManifestParser::new(), sink, progress)
    }

    /// Build the graph with a custom reference reader
    pub fn build_with(
        &mut self,
        solution: &Solution,
        reader: &dyn ReferenceReader,
        sink: &dyn DiagnosticSink,
        progress: Option<&ProgressReporter>,
    ) -> &DependencyGraph {
        self.graph = DependencyGraph::new();
        self.failures.clear();
        self.skipped_tests.clear();

        sink.debug("Analyzing project dependencies...");

        let mut in_scope = Vec::new();
        for project in solution.projects().values() {
            if self.filter.should_include(project) {
                in_scope.push(project);
            } else {
                sink.debug(&format!("Skipping test project: {}", project.name()));
                self.skipped_tests.push(project.name().to_string());
            }
        }

        if let Some(p) = progress {
            p.start_manifests(in_scope.len());
        }

        for project in in_scope {
            if let Some(p) = progress {
                p.parsing_manifest(project.name());
            }

            sink.debug(&format!(
                "Parsing project file: {}",
                project.manifest_path().display()
            ));

            match reader.read_references(project.manifest_path()) {
                Ok(references) => self.add_references(solution, project, references, sink),
                Err(error) => {
                    sink.error(&format!(
                        "Failed to parse dependencies for project '{}' ({}): {}",
                        project.name(),
                        project.manifest_path().display(),
                        error.chain()
                    ));
                    self.failures.push(ManifestFailure {
                        project: project.name().to_string(),
                        manifest: project.manifest_path().to_path_buf(),
                        error,
                    });
                }
            }
        }

        if let Some(p) = progress {
            p.finish_manifests();
        }

        &self.graph
    }

    fn add_references(
        &mut self,
        solution: &Solution,
        project: &Project,
        references: BTreeSet<String>,
        sink: &dyn DiagnosticSink,
    ) {
        for reference in references {
            if solution.contains(&reference) {
                sink.debug(&format!("  Found dependency: {} -> {}", project.name(), reference));
                self.graph.add_dependency(project.name(), &reference);
            } else {
                sink.debug(&format!(
                    "Dependency on external project: {reference} (not in solution)"
                ));
            }
        }
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn into_graph(self) -> DependencyGraph {
        self.graph
    }

    /// Projects excluded from the graph because their manifest failed
    pub fn failures(&self) -> &[ManifestFailure] {
        &self.failures
    }

    /// Test projects that were not parsed
    pub fn skipped_tests(&self) -> &[String] {
        &self.skipped_tests
    }
}
