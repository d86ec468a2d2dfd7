//! Common functionality shared across commands

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::SlnGraphError;

impl Cli {
    /// Solution directory, made absolute when possible
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory
            .canonicalize()
            .unwrap_or_else(|_| self.directory.clone())
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, SlnGraphError>;
}

/// Trait for configurations that can be created from the parsed command line
pub trait FromCommand: Sized {
    fn from_command(command: Cli) -> Result<Self, SlnGraphError>;
}

/// Macro to implement `TryFrom<Cli>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Cli> for $config {
            type Error = $crate::error::SlnGraphError;

            fn try_from(command: $crate::cli::Cli) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
