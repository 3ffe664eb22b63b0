//! Resolution of configured variables into the final variable mapping.

use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::template::{TemplateEngine, Variables};
use crate::transformers::{is_valid_name, Transformers};
use indexmap::IndexMap;
use log::debug;

/// Parses a `NAME=VALUE` preset answer.
///
/// # Errors
/// * `Error::ConfigError` if there is no `=`
/// * `Error::InvalidVariableName` if the name is not a valid identifier
pub fn parse_var(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| Error::ConfigError(format!("expected NAME=VALUE, got '{raw}'")))?;
    if !is_valid_name(name) {
        return Err(Error::InvalidVariableName(name.to_string()));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Resolves every configured variable in declaration order.
///
/// Each configured value is rendered against the mapping as it stands:
/// earlier variables hold their answers while later ones are still raw.
/// The rendered value is offered as the default unless a preset answer
/// exists, which is taken verbatim without asking.
///
/// # Errors
/// * `Error::UnknownVariable` if a preset names an undeclared variable
/// * Any rendering or prompt error
pub fn resolve_variables(
    configured: &IndexMap<String, String>,
    presets: &IndexMap<String, String>,
    transformers: &Transformers,
    prompter: &dyn Prompter,
) -> Result<Variables> {
    if let Some(name) = presets.keys().find(|name| !configured.contains_key(*name)) {
        return Err(Error::UnknownVariable(name.clone()));
    }

    let mut variables: Variables = configured.clone();
    let names: Vec<String> = variables.keys().cloned().collect();

    for name in names {
        let answer = match presets.get(&name) {
            Some(preset) => preset.clone(),
            None => {
                let raw = &variables[&name];
                let default = TemplateEngine::new(&variables, transformers).substitute(raw)?;
                prompter.ask(&name, &default)?
            }
        };
        debug!("Resolved '{name}' to '{answer}'");
        variables.insert(name, answer);
    }
    Ok(variables)
}
