//! Core graph types
//!
//! This module contains the data structures produced by the graph builder
//! and consumed by the renderer.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::error::SlnGraphError;

/// Internal project dependencies of a solution
///
/// Maps a project name to the names of the solution projects it references,
/// in discovery order. Only projects with at least one internal reference
/// have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    dependencies: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dependency(&mut self, source: &str, target: &str) {
        self.dependencies
            .entry(source.to_string())
            .or_default()
            .push(target.to_string());
    }

    pub fn dependencies(&self) -> &BTreeMap<String, Vec<String>> {
        &self.dependencies
    }

    pub fn dependencies_of(&self, project: &str) -> Option<&[String]> {
        self.dependencies.get(project).map(Vec::as_slice)
    }

    /// Every project appearing as an edge source or target, sorted
    pub fn nodes(&self) -> BTreeSet<&str> {
        let mut nodes: BTreeSet<&str> = self.dependencies.keys().map(String::as_str).collect();
        for targets in self.dependencies.values() {
            nodes.extend(targets.iter().map(String::as_str));
        }
        nodes
    }

    /// `(source, target)` pairs, sorted by source then target
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::new();
        for (source, targets) in &self.dependencies {
            let mut sorted: Vec<&str> = targets.iter().map(String::as_str).collect();
            sorted.sort_unstable();
            edges.extend(sorted.into_iter().map(|target| (source.as_str(), target)));
        }
        edges
    }

    /// Number of projects with outgoing edges
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl From<BTreeMap<String, Vec<String>>> for DependencyGraph {
    fn from(dependencies: BTreeMap<String, Vec<String>>) -> Self {
        Self { dependencies }
    }
}

/// A project whose manifest could not be read during graph construction
#[derive(Debug)]
pub struct ManifestFailure {
    pub project: String,
    pub manifest: PathBuf,
    pub error: SlnGraphError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_include_targets_without_entries() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("Api", "Core");
        graph.add_dependency("Api", "Auth");

        assert_eq!(
            graph.nodes().into_iter().collect::<Vec<_>>(),
            vec!["Api", "Auth", "Core"]
        );
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.dependencies_of("Core"), None);
    }

    #[test]
    fn test_edges_are_sorted_but_insertion_order_is_kept() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("Web", "Core");
        graph.add_dependency("Api", "Data");
        graph.add_dependency("Api", "Core");

        assert_eq!(
            graph.dependencies_of("Api"),
            Some(&["Data".to_string(), "Core".to_string()][..])
        );
        assert_eq!(
            graph.edges(),
            vec![("Api", "Core"), ("Api", "Data"), ("Web", "Core")]
        );
    }
}
