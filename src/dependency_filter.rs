//! Project filtering functionality

use crate::core::Project;

/// Decides which projects take part in the dependency graph
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectFilter {
    include_tests: bool,
}

impl ProjectFilter {
    pub fn new(include_tests: bool) -> Self {
        Self { include_tests }
    }

    /// Check if test projects should be included
    pub fn include_tests(&self) -> bool {
        self.include_tests
    }

    /// Check if a project's manifest should be parsed and its edges emitted
    ///
    /// This only decides whether a project acts as an edge source. A project
    /// rejected here can still be the target of an edge from an included one.
    pub fn should_include(&self, project: &Project) -> bool {
        self.include_tests || !project.is_test()
    }
}

impl From<&crate::config::GraphOptions> for ProjectFilter {
    fn from(options: &crate::config::GraphOptions) -> Self {
        Self::new(options.include_tests)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn project(path: &str) -> Project {
        Project::new("P", PathBuf::from(path), path)
    }

    #[test]
    fn test_excludes_tests_by_default() {
        let filter = ProjectFilter::default();

        assert!(filter.should_include(&project("/repo/src/P/P.csproj")));
        assert!(!filter.should_include(&project("/repo/tests/P/P.csproj")));
    }

    #[test]
    fn test_includes_tests_when_requested() {
        let filter = ProjectFilter::new(true);

        assert!(filter.include_tests());
        assert!(filter.should_include(&project("/repo/tests/P/P.csproj")));
    }
}
