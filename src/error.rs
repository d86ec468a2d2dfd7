use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid markup in project manifest '{file}': {reason}")]
#[diagnostic(
    code(sln_graph::manifest_parse_error),
    help("Check the XML syntax near the highlighted position")
)]
pub struct ManifestParseError {
    pub file: String,
    pub reason: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("markup error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: Option<quick_xml::Error>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum SlnGraphError {
    #[error("File not found: '{path}'")]
    #[diagnostic(
        code(sln_graph::missing_file),
        help("Check that the path is correct and the file exists")
    )]
    MissingFile { path: PathBuf },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(sln_graph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read solution file (invalid encoding): '{path}'")]
    #[diagnostic(
        code(sln_graph::encoding_error),
        help("Solution files must be UTF-8 encoded (a byte order mark is allowed)")
    )]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("No .sln files found in directory: '{directory}'")]
    #[diagnostic(
        code(sln_graph::missing_descriptor),
        help("Run the tool from the solution directory or pass it as an argument")
    )]
    MissingDescriptor { directory: PathBuf },

    #[error(
        "Multiple .sln files found in directory '{directory}': {}",
        join_paths(.candidates)
    )]
    #[diagnostic(
        code(sln_graph::ambiguous_descriptor),
        help("Select one of them with --solution <FILE>")
    )]
    AmbiguousDescriptor {
        directory: PathBuf,
        candidates: Vec<PathBuf>,
    },

    #[error("No C# projects found in solution: '{path}'")]
    #[diagnostic(
        code(sln_graph::no_projects),
        help("Only Project(...) declarations pointing at .csproj files are recognized")
    )]
    NoProjectsFound { path: PathBuf },

    #[error("Project file not found for '{project}': '{path}'")]
    #[diagnostic(
        code(sln_graph::missing_project_file),
        help("The solution declares a project whose manifest does not exist on disk")
    )]
    MissingProjectFile { project: String, path: PathBuf },

    #[error("Duplicate project name '{project}' in solution ('{first}' and '{second}')")]
    #[diagnostic(
        code(sln_graph::duplicate_project),
        help("Project names must be unique within a solution")
    )]
    DuplicateProject {
        project: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidManifest(Box<ManifestParseError>),

    #[error("Invalid project reference format in '{manifest}': '{value}'")]
    #[diagnostic(
        code(sln_graph::invalid_reference),
        help("ProjectReference Include must name a project file, e.g. ..\\Core\\Core.csproj")
    )]
    InvalidReference { manifest: PathBuf, value: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(sln_graph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("Failed to write graph output")]
    #[diagnostic(
        code(sln_graph::output_error),
        help("Check file permissions and disk space")
    )]
    OutputWrite(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(sln_graph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl SlnGraphError {
    /// Render the error and its chain of causes on a single line.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_manifest_parse_error_display() {
        let error = ManifestParseError {
            file: "Api.csproj".to_string(),
            reason: "unclosed element <Project>".to_string(),
            source_code: NamedSource::new("Api.csproj", "<Project>".to_string()),
            span: Some((9, 0).into()),
            source: None,
        };

        assert_eq!(
            error.to_string(),
            "Invalid markup in project manifest 'Api.csproj': unclosed element <Project>"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = SlnGraphError::FileReadError {
            path: PathBuf::from("/tmp/missing.sln"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.sln'");
        assert_eq!(
            error.chain(),
            "Failed to read file '/tmp/missing.sln': file not found"
        );
    }

    #[test]
    fn test_ambiguous_descriptor_lists_candidates() {
        let error = SlnGraphError::AmbiguousDescriptor {
            directory: PathBuf::from("/repo"),
            candidates: vec![PathBuf::from("/repo/A.sln"), PathBuf::from("/repo/B.sln")],
        };

        assert_eq!(
            error.to_string(),
            "Multiple .sln files found in directory '/repo': /repo/A.sln, /repo/B.sln"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = SlnGraphError::ConfigurationError {
            message: "Invalid configuration value".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration value"
        );
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = SlnGraphError::MissingProjectFile {
            project: "Core".to_string(),
            path: PathBuf::from("src/Core/Core.csproj"),
        };

        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_output_write_keeps_io_cause() {
        let error: SlnGraphError = io::Error::other("disk full").into();

        assert!(matches!(error, SlnGraphError::OutputWrite(_)));
        assert_eq!(error.chain(), "Failed to write graph output: disk full");
    }
}
