//! tombot bootstraps a new project directory from a template directory tree,
//! substituting variables into file names, directory names and file contents.

/// Resolution of configured variables through presets and prompts
pub mod answers;

/// Staged, per-subdirectory bootstrapping of a template root
pub mod bootstrap;

/// Command-line interface module for the tombot application
pub mod cli;

/// Loading of the template's `config.toml`
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the tombot application
pub mod error;

/// Template lookup in the templates directory
pub mod loader;

/// Logger setup for the binary
pub mod logger;

/// Recursive rendering of a template tree into a destination directory
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Rendering of template strings and paths
pub mod renderer;

/// The `$` template language and its substitution engine
pub mod template;

/// Named string transformers for template pipelines
pub mod transformers;
