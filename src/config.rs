//! Configuration handling for tombot templates.
//! Every template root carries a `config.toml` declaring its variables:
//!
//! ```toml
//! [variables]
//! project_name = "my project"
//! package = "${project_name|to_snake_case}"
//! ```

use crate::constants::CONFIG_FILE;
use crate::error::{Error, Result};
use crate::transformers::is_valid_name;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Parsed contents of `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Variable defaults in declaration order. Values may reference
    /// variables declared earlier.
    #[serde(default)]
    pub variables: IndexMap<String, String>,
}

/// Parses configuration content and validates variable names.
///
/// # Errors
/// * `Error::ConfigError` if the content is not a valid configuration
/// * `Error::InvalidVariableName` if a variable name is not `[_a-z][_a-z0-9]*`
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))?;

    if let Some(name) = config.variables.keys().find(|name| !is_valid_name(name)) {
        return Err(Error::InvalidVariableName(name.clone()));
    }
    Ok(config)
}

/// Loads `config.toml` from the template root.
///
/// # Errors
/// * `Error::ConfigError` if the file is missing or cannot be parsed
pub fn get_config<P: AsRef<Path>>(template_root: P) -> Result<Config> {
    let config_path = template_root.as_ref().join(CONFIG_FILE);
    if !config_path.is_file() {
        return Err(Error::ConfigError(format!(
            "No configuration file found at {}",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path)?;
    parse_config(&content)
}
