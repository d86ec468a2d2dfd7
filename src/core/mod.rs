//! Core data types and structures
//!
//! This module contains the solution and project records shared by the
//! parsers and the graph builder, separated from their parsing logic.

pub mod types;

pub use types::*;
