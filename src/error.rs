//! Error handling for tombot.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving variables, rendering templates
/// and bootstrapping project trees.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A `$` that does not start an escape, a bare reference or a braced reference.
    #[error("Invalid template: '{fragment}' at offset {offset}.")]
    InvalidTemplate { fragment: String, offset: usize },

    /// A directive references a name missing from the variable mapping.
    #[error("Unknown variable: '{0}'.")]
    UnknownVariable(String),

    /// A pipeline references a transformer missing from the registry.
    #[error("Unknown transformer: '{0}'.")]
    UnknownTransformer(String),

    /// A variable or transformer name outside `[_a-z][_a-z0-9]*`.
    #[error("Invalid name: '{0}'.")]
    InvalidVariableName(String),

    /// Template paths must be valid UTF-8 to be rendered.
    #[error("Path is not valid unicode: '{}'.", .0.display())]
    NonUnicodePath(PathBuf),

    /// A path segment rendered to something that escapes its parent directory.
    #[error("Rendered path segment '{segment}' is absolute or leaves its directory.")]
    UnsafePath { segment: String },

    #[error("Destination '{}' already exists.", .path.display())]
    DestinationExists { path: PathBuf },

    #[error("Template '{template_dir}' does not exist.")]
    TemplateDoesNotExist { template_dir: String },

    /// Represents errors that occur while reading `config.toml`
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors raised by the interactive prompt
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
