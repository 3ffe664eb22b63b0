//! The `$` template language.
//!
//! A template is plain text with directives introduced by `$`:
//! - `$$` is an escaped, literal `$`
//! - `$name` is a bare reference; the name runs as long as `[_a-z0-9]` continues
//! - `${name}` and `${name|t1|t2}` are braced references, optionally piped
//!   through transformers applied left to right
//!
//! Any other use of `$` is an error. Pipes mean nothing outside braces,
//! so `$foo|bar` renders `foo` followed by the literal text `|bar`.

use crate::constants::{DELIMITER, ID_PATTERN};
use crate::error::{Error, Result};
use crate::transformers::Transformers;
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Resolved variable values keyed by name, in declaration order.
pub type Variables = IndexMap<String, String>;

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\$(?:(?P<escaped>\$)|(?P<named>{id})|\{{(?P<braced>{id}(?:\|{id})*)\}}|(?P<invalid>))",
        id = ID_PATTERN
    ))
    .expect("valid regex")
});

/// A single `$`-introduced construct found in a template.
#[derive(Debug, PartialEq, Eq)]
enum Directive<'t> {
    /// `$$`
    Escaped,
    /// `$name`
    Named(&'t str),
    /// `${name|t1|t2}`
    Braced { name: &'t str, pipeline: Vec<&'t str> },
    /// Anything else following a `$`
    Invalid,
}

impl<'t> Directive<'t> {
    fn from_captures(caps: &Captures<'t>) -> Self {
        if caps.name("escaped").is_some() {
            Directive::Escaped
        } else if let Some(named) = caps.name("named") {
            Directive::Named(named.as_str())
        } else if let Some(braced) = caps.name("braced") {
            let mut parts = braced.as_str().split('|');
            let name = parts.next().unwrap_or_default();
            Directive::Braced { name, pipeline: parts.collect() }
        } else {
            Directive::Invalid
        }
    }
}

/// Cuts the offending text out of `template` for error reporting: the `$`,
/// the character after it and, for braces, everything up to the closing `}`.
fn invalid_fragment(template: &str, offset: usize) -> &str {
    let rest = &template[offset..];
    let mut chars = rest.char_indices().skip(1);
    let end = match chars.next() {
        None => rest.len(),
        Some((i, '{')) => rest[i..].find('}').map_or(rest.len(), |close| i + close + 1),
        Some((i, c)) => i + c.len_utf8(),
    };
    rest[..end].trim_end()
}

/// Substitutes variables into templates.
///
/// The engine borrows the variable mapping and the transformer registry and
/// keeps no state of its own, so substitution is a pure function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEngine<'a> {
    variables: &'a Variables,
    transformers: &'a Transformers,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(variables: &'a Variables, transformers: &'a Transformers) -> Self {
        Self { variables, transformers }
    }

    fn lookup(&self, name: &str) -> Result<&'a str> {
        self.variables
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))
    }

    fn transform(&self, value: &str, pipeline: &[&str]) -> Result<String> {
        pipeline.iter().try_fold(value.to_string(), |value, name| {
            let transformer = self.transformers.lookup(name)?;
            Ok(transformer(&value))
        })
    }

    /// Substitutes every directive in `template`.
    ///
    /// # Errors
    /// * `Error::InvalidTemplate` on a malformed directive
    /// * `Error::UnknownVariable` if a referenced variable is not defined
    /// * `Error::UnknownTransformer` if a pipeline step is not registered
    ///
    /// No partial output is returned on error.
    pub fn substitute(&self, template: &str) -> Result<String> {
        let mut output = String::with_capacity(template.len());
        let mut last = 0;
        for caps in DIRECTIVE.captures_iter(template) {
            let Some(matched) = caps.get(0) else { continue };
            output.push_str(&template[last..matched.start()]);
            match Directive::from_captures(&caps) {
                Directive::Escaped => output.push(DELIMITER),
                Directive::Named(name) => output.push_str(self.lookup(name)?),
                Directive::Braced { name, pipeline } => {
                    output.push_str(&self.transform(self.lookup(name)?, &pipeline)?)
                }
                Directive::Invalid => {
                    return Err(Error::InvalidTemplate {
                        fragment: invalid_fragment(template, matched.start()).to_string(),
                        offset: matched.start(),
                    })
                }
            }
            last = matched.end();
        }
        output.push_str(&template[last..]);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_classification() {
        let template = "a $$ $foo|x ${bar|up|low} $1";
        let found: Vec<_> = DIRECTIVE
            .captures_iter(template)
            .map(|caps| (caps.get(0).unwrap().start(), Directive::from_captures(&caps)))
            .collect();
        assert_eq!(
            found,
            vec![
                (2, Directive::Escaped),
                (5, Directive::Named("foo")),
                (12, Directive::Braced { name: "bar", pipeline: vec!["up", "low"] }),
                (26, Directive::Invalid),
            ]
        );
    }

    #[test]
    fn test_invalid_fragment() {
        assert_eq!(invalid_fragment("$", 0), "$");
        assert_eq!(invalid_fragment("x $1foo", 2), "$1");
        assert_eq!(invalid_fragment("$ foo", 0), "$");
        assert_eq!(invalid_fragment("${foo } tail", 0), "${foo }");
        assert_eq!(invalid_fragment("${foo\n", 0), "${foo");
    }
}
