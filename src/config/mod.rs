//! # Configuration Module
//!
//! Configuration for the graph command, assembled with a builder.
//!
//! ## Example
//!
//! ```
//! use sln_graph::ConfigBuilder;
//! use sln_graph::cli::GraphFormat;
//! use sln_graph::config::GraphOptions;
//!
//! let options = GraphOptions::builder()
//!     .with_directory(".".into())
//!     .with_solution(None)
//!     .with_include_tests(false)
//!     .with_verbose(false)
//!     .with_format(GraphFormat::Mermaid)
//!     .with_output(None)
//!     .build()
//!     .unwrap();
//!
//! assert!(!options.include_tests);
//! ```

pub mod graph;

pub use graph::{GraphOptions, GraphOptionsBuilder};
