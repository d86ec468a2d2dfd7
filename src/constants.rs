//! Configuration constants for sln-graph
//!
//! This module contains the fixed vocabulary of the solution and manifest
//! formats along with output and progress settings used throughout the
//! application.

use std::time::Duration;

/// Solution descriptor format
pub mod solution {
    /// Extension of solution descriptor files, without the dot
    pub const DESCRIPTOR_EXTENSION: &str = "sln";

    /// Keyword opening a project declaration line
    pub const DECLARATION_KEYWORD: &str = "Project";

    /// Extension of the project manifests honored in a solution
    pub const MANIFEST_EXTENSION: &str = ".csproj";

    /// Path component marking a project as test code
    pub const TEST_SEGMENT: &str = "tests";
}

/// Project manifest format
pub mod manifest {
    /// Element declaring a reference onto another project
    pub const REFERENCE_ELEMENT: &str = "ProjectReference";

    /// Attribute carrying the referenced manifest path
    pub const INCLUDE_ATTRIBUTE: &str = "Include";
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while manifests are parsed
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒", "✓"];
}

/// Output formatting configuration
pub mod output {
    /// Default graph format when not specified
    pub const DEFAULT_FORMAT: &str = "mermaid";

    /// Tool name written into generated diagrams
    pub const GENERATOR: &str = env!("CARGO_PKG_NAME");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.last(), Some(&"✓"));
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "mermaid");
        assert_eq!(output::GENERATOR, "sln-graph");
    }

    #[test]
    fn test_manifest_extension_is_dotted() {
        assert!(solution::MANIFEST_EXTENSION.starts_with('.'));
    }
}
