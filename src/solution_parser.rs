//! Solution descriptor parsing
//!
//! A descriptor is line oriented. Projects are declared one per line:
//!
//! ```text
//! Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "Core", "src\Core\Core.csproj", "{5D7C...}"
//! ```
//!
//! Every other line (global sections, `EndProject`, solution folders whose
//! path is not a manifest) is ignored.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

use crate::constants::solution::{DECLARATION_KEYWORD, MANIFEST_EXTENSION};
use crate::core::{Project, Solution};
use crate::diagnostics::DiagnosticSink;
use crate::error::SlnGraphError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A single `Project(...) = "Name", "Path", "{GUID}"` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDeclaration<'a> {
    pub type_guid: &'a str,
    pub name: &'a str,
    pub path: &'a str,
    pub project_guid: &'a str,
}

impl<'a> ProjectDeclaration<'a> {
    /// Match one descriptor line against the project declaration grammar
    pub fn parse_line(line: &'a str) -> Option<Self> {
        let mut scanner = LineScanner::new(line.trim_start());

        scanner.keyword(DECLARATION_KEYWORD)?;
        scanner.punct('(')?;
        let type_guid = scanner.quoted_guid()?;
        scanner.punct(')')?;
        scanner.punct('=')?;
        let name = scanner.quoted()?;
        scanner.punct(',')?;
        let path = scanner.quoted()?;
        scanner.punct(',')?;
        let project_guid = scanner.quoted_guid()?;

        Some(Self {
            type_guid,
            name,
            path,
            project_guid,
        })
    }

    /// Whether the declared path points at a recognized project manifest
    pub fn is_manifest(&self) -> bool {
        self.path
            .to_ascii_lowercase()
            .ends_with(MANIFEST_EXTENSION)
    }
}

struct LineScanner<'a> {
    rest: &'a str,
}

impl<'a> LineScanner<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn keyword(&mut self, keyword: &str) -> Option<()> {
        let head = self.rest.get(..keyword.len())?;
        if !head.eq_ignore_ascii_case(keyword) {
            return None;
        }
        self.rest = &self.rest[keyword.len()..];
        Some(())
    }

    fn punct(&mut self, expected: char) -> Option<()> {
        self.skip_whitespace();
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }

    /// A non-empty double-quoted string without embedded quotes
    fn quoted(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let body = self.rest.strip_prefix('"')?;
        let end = body.find('"')?;
        if end == 0 {
            return None;
        }
        self.rest = &body[end + 1..];
        Some(&body[..end])
    }

    /// A quoted `{...}` identifier, returned without the braces
    fn quoted_guid(&mut self) -> Option<&'a str> {
        let value = self.quoted()?;
        let inner = value.strip_prefix('{')?.strip_suffix('}')?;
        if inner.is_empty() || inner.contains('}') {
            return None;
        }
        Some(inner)
    }
}

/// Parser for solution descriptor files
pub struct SolutionParser<'s> {
    sink: &'s dyn DiagnosticSink,
}

impl<'s> SolutionParser<'s> {
    pub fn new(sink: &'s dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    pub fn parse(&self, descriptor_path: &Path) -> Result<Solution, SlnGraphError> {
        self.sink
            .debug(&format!("Parsing solution file: {}", descriptor_path.display()));

        if !descriptor_path.exists() {
            return Err(SlnGraphError::MissingFile {
                path: descriptor_path.to_path_buf(),
            });
        }

        let content = read_descriptor(descriptor_path)?;
        let directory = Solution::directory_of(descriptor_path);

        let mut projects: BTreeMap<String, Project> = BTreeMap::new();

        for line in content.lines() {
            let Some(declaration) = ProjectDeclaration::parse_line(line) else {
                continue;
            };

            if !declaration.is_manifest() {
                self.sink.debug(&format!(
                    "Skipping non-C# project: {} ({})",
                    declaration.name, declaration.path
                ));
                continue;
            }

            let project = self.resolve_project(&directory, &declaration)?;

            match projects.entry(project.name().to_string()) {
                Entry::Vacant(slot) => {
                    self.sink.debug(&format!(
                        "Found project: {} ({})",
                        project.name(),
                        project.manifest_path().display()
                    ));
                    slot.insert(project);
                }
                Entry::Occupied(existing) => {
                    return Err(SlnGraphError::DuplicateProject {
                        project: project.name().to_string(),
                        first: existing.get().relative_path().to_string(),
                        second: project.relative_path().to_string(),
                    });
                }
            }
        }

        if projects.is_empty() {
            return Err(SlnGraphError::NoProjectsFound {
                path: descriptor_path.to_path_buf(),
            });
        }

        self.sink
            .debug(&format!("Found {} projects in solution", projects.len()));

        Ok(Solution::new(descriptor_path.to_path_buf(), projects))
    }

    fn resolve_project(
        &self,
        directory: &Path,
        declaration: &ProjectDeclaration<'_>,
    ) -> Result<Project, SlnGraphError> {
        let normalized = declaration.path.replace('\\', "/");
        let candidate = directory.join(&normalized);

        if !candidate.exists() {
            return Err(SlnGraphError::MissingProjectFile {
                project: declaration.name.to_string(),
                path: candidate,
            });
        }

        let manifest_path = candidate.canonicalize().map_err(|source| {
            SlnGraphError::FileReadError {
                path: candidate.clone(),
                source,
            }
        })?;

        Ok(Project::new(
            declaration.name,
            manifest_path,
            declaration.path,
        ))
    }
}

fn read_descriptor(path: &Path) -> Result<String, SlnGraphError> {
    let bytes = std::fs::read(path).map_err(|source| SlnGraphError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let bytes = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_vec(),
        None => bytes,
    };

    String::from_utf8(bytes).map_err(|source| SlnGraphError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}
