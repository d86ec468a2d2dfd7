//! Solution descriptor discovery
//!
//! Picks "the" solution descriptor of a directory. Exactly one candidate
//! must exist: none and several are both fatal.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::constants::solution::DESCRIPTOR_EXTENSION;
use crate::error::SlnGraphError;

/// Strategy for locating the solution descriptor of a directory
pub trait DescriptorLocator {
    fn locate(&self, directory: &Path) -> Result<PathBuf, SlnGraphError>;
}

/// Looks for `*.sln` files directly inside the directory
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobLocator;

impl GlobLocator {
    pub fn new() -> Self {
        Self
    }

    /// All descriptor candidates in `directory`, sorted by path
    pub fn candidates(&self, directory: &Path) -> Result<Vec<PathBuf>, SlnGraphError> {
        let pattern = format!(
            "{}/*.{}",
            Pattern::escape(&directory.to_string_lossy()),
            DESCRIPTOR_EXTENSION
        );

        let entries = glob::glob_with(&pattern, MatchOptions::new()).map_err(|e| {
            SlnGraphError::ConfigurationError {
                message: format!("Invalid solution search pattern '{pattern}': {e}"),
            }
        })?;

        let mut candidates: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect();
        candidates.sort();

        Ok(candidates)
    }
}

impl DescriptorLocator for GlobLocator {
    fn locate(&self, directory: &Path) -> Result<PathBuf, SlnGraphError> {
        let mut candidates = self.candidates(directory)?;

        match candidates.len() {
            0 => Err(SlnGraphError::MissingDescriptor {
                directory: directory.to_path_buf(),
            }),
            1 => Ok(candidates.remove(0)),
            _ => Err(SlnGraphError::AmbiguousDescriptor {
                directory: directory.to_path_buf(),
                candidates,
            }),
        }
    }
}
