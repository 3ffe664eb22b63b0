//! Rendering of template strings and template paths.
use crate::constants::DOT_PREFIX;
use crate::error::{Error, Result};
use crate::template::TemplateEngine;
use std::path::{Component, Path, PathBuf};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str) -> Result<String>;
}

impl TemplateRenderer for TemplateEngine<'_> {
    fn render(&self, template: &str) -> Result<String> {
        self.substitute(template)
    }
}

/// Rewrites a leading `dot-` into `.`, so templates can ship dotfiles
/// without containing hidden entries themselves.
fn restore_dot_prefix(segment: String) -> String {
    match segment.strip_prefix(DOT_PREFIX) {
        Some(rest) => format!(".{rest}"),
        None => segment,
    }
}

/// Renders every segment of `path` independently.
///
/// Only normal segments are templated; root, `.` and `..` of the input pass
/// through. No filesystem access happens here.
///
/// # Errors
/// * `Error::NonUnicodePath` if a segment is not valid UTF-8
/// * `Error::UnsafePath` if a segment renders to an absolute path, `.` or `..`
/// * Any error raised by the renderer for a segment
pub fn render_path<P: AsRef<Path>>(renderer: &dyn TemplateRenderer, path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let mut rendered = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => {
                let segment = segment
                    .to_str()
                    .ok_or_else(|| Error::NonUnicodePath(path.to_path_buf()))?;
                let value = restore_dot_prefix(renderer.render(segment)?);
                // A rendered segment may add nested directories but never
                // a root, `.` or `..` that would leave its parent.
                if !Path::new(&value).components().all(|c| matches!(c, Component::Normal(_))) {
                    return Err(Error::UnsafePath { segment: value });
                }
                rendered.push(value);
            }
            other => rendered.push(other.as_os_str()),
        }
    }
    Ok(rendered)
}
