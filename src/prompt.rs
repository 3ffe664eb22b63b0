//! User input handling for variable resolution.

use crate::error::{Error, Result};
use dialoguer::Input;

/// Source of variable values.
pub trait Prompter {
    /// Asks for the value of `name`, offering the rendered `default`.
    fn ask(&self, name: &str, default: &str) -> Result<String>;
}

/// Interactive prompter reading answers from the terminal.
/// An empty answer keeps the default.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, name: &str, default: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(name)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Non-interactive prompter accepting every default.
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask(&self, _name: &str, default: &str) -> Result<String> {
        Ok(default.to_string())
    }
}
