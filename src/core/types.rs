//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::constants::solution::TEST_SEGMENT;

/// A project declared in a solution descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    manifest_path: PathBuf,
    relative_path: String,
    is_test: bool,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        manifest_path: PathBuf,
        relative_path: impl Into<String>,
    ) -> Self {
        let is_test = is_test_path(&manifest_path);
        Self {
            name: name.into(),
            manifest_path,
            relative_path: relative_path.into(),
            is_test,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the project manifest
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Manifest path exactly as written in the solution descriptor
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn is_test(&self) -> bool {
        self.is_test
    }
}

/// True when any component of `path` is the test segment, ignoring case
pub fn is_test_path(path: &Path) -> bool {
    path.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .is_some_and(|segment| segment.eq_ignore_ascii_case(TEST_SEGMENT))
    })
}

/// A parsed solution descriptor
#[derive(Debug, Clone)]
pub struct Solution {
    descriptor_path: PathBuf,
    directory: PathBuf,
    projects: BTreeMap<String, Project>,
}

impl Solution {
    pub fn new(descriptor_path: PathBuf, projects: BTreeMap<String, Project>) -> Self {
        let directory = Self::directory_of(&descriptor_path);
        Self {
            descriptor_path,
            directory,
            projects,
        }
    }

    /// Directory project paths of `descriptor_path` are relative to
    pub fn directory_of(descriptor_path: &Path) -> PathBuf {
        match descriptor_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Solution name, taken from the descriptor file stem
    pub fn name(&self) -> String {
        self.descriptor_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn projects(&self) -> &BTreeMap<String, Project> {
        &self.projects
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_under_tests_segment_is_test() {
        let project = Project::new(
            "Core.UnitTests",
            PathBuf::from("/repo/Tests/Core.UnitTests/Core.UnitTests.csproj"),
            "Tests\\Core.UnitTests\\Core.UnitTests.csproj",
        );

        assert!(project.is_test());
        assert_eq!(
            project.relative_path(),
            "Tests\\Core.UnitTests\\Core.UnitTests.csproj"
        );
    }

    #[test]
    fn test_segment_must_match_whole_component() {
        assert!(!is_test_path(Path::new("/repo/src/Core.Tests/Core.Tests.csproj")));
        assert!(!is_test_path(Path::new("/repo/unittests/Core/Core.csproj")));
        assert!(is_test_path(Path::new("/repo/TESTS/Core/Core.csproj")));
    }

    #[test]
    fn test_solution_name_and_directory() {
        let solution = Solution::new(PathBuf::from("/repo/Shop.sln"), BTreeMap::new());

        assert_eq!(solution.name(), "Shop");
        assert_eq!(solution.directory(), Path::new("/repo"));
    }

    #[test]
    fn test_bare_descriptor_name_uses_current_directory() {
        let solution = Solution::new(PathBuf::from("Shop.sln"), BTreeMap::new());

        assert_eq!(solution.directory(), Path::new("."));
    }

    #[test]
    fn test_directory_of_matches_solution_directory() {
        let descriptor = PathBuf::from("/repo/build/Shop.sln");
        let solution = Solution::new(descriptor.clone(), BTreeMap::new());

        assert_eq!(Solution::directory_of(&descriptor), solution.directory());
        assert_eq!(solution.descriptor_path(), descriptor.as_path());
    }
}
