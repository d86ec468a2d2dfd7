//! # Graph Construction and Rendering Module
//!
//! This module turns a parsed [`Solution`](crate::core::Solution) into a
//! [`DependencyGraph`] and renders it as text.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraphBuilder**: Reads project manifests and keeps the
//!   references that resolve to projects of the same solution
//! - **DependencyGraph**: Project name to internal dependency names
//! - **ManifestFailure**: A project left out because its manifest failed
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders graphs as Mermaid, DOT or JSON
//!
//! ## Example
//!
//! ```
//! use sln_graph::graph::{DependencyGraph, GraphRenderer};
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_dependency("Api", "Core");
//!
//! let diagram = GraphRenderer::new("Shop").mermaid(&graph);
//!
//! assert!(diagram.starts_with("%% Dependencies diagram for solution: Shop\n"));
//! assert!(diagram.contains("    Core[\"Core\"]\n"));
//! assert!(diagram.ends_with("    Api --> Core\n"));
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::DependencyGraphBuilder;
pub use renderer::{GraphRenderer, escape_label, render};
pub use types::{DependencyGraph, ManifestFailure};
