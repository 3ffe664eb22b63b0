//! Template lookup in the templates directory.
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Returns the template root for `name` inside `templates_dir`.
///
/// # Errors
/// * `Error::TemplateDoesNotExist` if the template root is not a directory
pub fn load_template<P: AsRef<Path>>(templates_dir: P, name: &str) -> Result<PathBuf> {
    let template_root = templates_dir.as_ref().join(name);
    if !template_root.is_dir() {
        return Err(Error::TemplateDoesNotExist {
            template_dir: template_root.display().to_string(),
        });
    }

    debug!("Using template from '{}'", template_root.display());
    Ok(template_root)
}
