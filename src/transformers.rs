//! Named string transformers applied in braced reference pipelines,
//! e.g. `${project|to_snake_case}`.

use crate::constants::ID_PATTERN;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

/// A pure string-to-string function.
pub type Transformer = Box<dyn Fn(&str) -> String + Send + Sync>;

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{ID_PATTERN}$")).expect("valid regex"));

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^[\s_-]*|[\s_-]+)(\w)").expect("valid regex"));

static KEBAB_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("valid regex"));

static SNAKE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("valid regex"));

/// Returns true if `name` is a valid variable or transformer identifier.
pub fn is_valid_name(name: &str) -> bool {
    NAME.is_match(name)
}

/// Drops every run of whitespace, `_` or `-` (and the string start) that
/// precedes a word character and upper-cases that character.
pub fn to_camel_case(s: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(s, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Lower-cases the string and joins whitespace/underscore runs with `-`.
pub fn to_kebab_case(s: &str) -> String {
    KEBAB_SEPARATORS.replace_all(&s.to_lowercase(), "-").into_owned()
}

/// Lower-cases the string and joins whitespace/dash runs with `_`.
pub fn to_snake_case(s: &str) -> String {
    SNAKE_SEPARATORS.replace_all(&s.to_lowercase(), "_").into_owned()
}

/// Registry mapping transformer names to their functions.
///
/// Built once at startup and handed to the template engine by reference.
#[derive(Default)]
pub struct Transformers {
    registry: IndexMap<String, Transformer>,
}

impl Transformers {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `to_camel_case`, `to_kebab_case` and `to_snake_case`.
    pub fn with_defaults() -> Self {
        let mut transformers = Self::new();
        transformers.registry.insert("to_camel_case".into(), Box::new(to_camel_case));
        transformers.registry.insert("to_kebab_case".into(), Box::new(to_kebab_case));
        transformers.registry.insert("to_snake_case".into(), Box::new(to_snake_case));
        transformers
    }

    /// Registers a transformer, replacing any previous one with the same name.
    ///
    /// # Errors
    /// * `Error::InvalidVariableName` if `name` is not a valid identifier,
    ///   since such a name could never be referenced from a pipeline
    pub fn register<F>(&mut self, name: &str, transformer: F) -> Result<()>
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        if !is_valid_name(name) {
            return Err(Error::InvalidVariableName(name.to_string()));
        }
        self.registry.insert(name.to_string(), Box::new(transformer));
        Ok(())
    }

    /// Looks up a transformer by name.
    ///
    /// # Errors
    /// * `Error::UnknownTransformer` if nothing is registered under `name`
    pub fn lookup(&self, name: &str) -> Result<&Transformer> {
        self.registry
            .get(name)
            .ok_or_else(|| Error::UnknownTransformer(name.to_string()))
    }

    /// Names of all registered transformers in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }
}

impl fmt::Debug for Transformers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
