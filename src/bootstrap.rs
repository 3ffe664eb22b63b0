//! Bootstraps a project from every variant directory of a template root.
//!
//! Each top-level subdirectory is rendered into a scratch directory first and
//! only moved to its destination once every file rendered successfully.

use crate::error::{Error, Result};
use crate::processor::{copy_tree, read_children};
use crate::renderer::{render_path, TemplateRenderer};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use walkdir::WalkDir;

const SCRATCH_PREFIX: &str = ".tombot-";

/// Creates a scratch directory under `root` holding an empty `staged` child.
///
/// The scratch directory itself is private (0700), so trees are built in the
/// child and the child is what gets moved.
fn scratch_in(root: &Path) -> Result<(TempDir, PathBuf)> {
    let scratch = Builder::new().prefix(SCRATCH_PREFIX).tempdir_in(root)?;
    let staged = scratch.path().join("staged");
    fs::create_dir(&staged)?;
    Ok((scratch, staged))
}

/// Recursively copies the directories and regular files of `source` into `target`.
fn copy_dir_all(source: &Path, target: &Path) -> Result<()> {
    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let relative = entry.path().strip_prefix(source).map_err(io::Error::other)?;
        let dest = target.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

/// Copies `staged` next to `target` and renames the copy into place, so a
/// failed copy never leaves a partial tree at `target`.
fn publish_by_copy(staged: &Path, target: &Path) -> Result<()> {
    let parent = target.parent().unwrap_or_else(|| Path::new("."));
    let (_scratch, copy) = scratch_in(parent)?;
    copy_dir_all(staged, &copy)?;
    fs::rename(&copy, target)?;
    Ok(())
}

/// Moves a fully staged tree to `target`.
///
/// Refuses to touch an existing destination. Falls back to copying only when
/// the staged tree lives on another filesystem.
fn publish(staged: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        return Err(Error::DestinationExists { path: target.to_path_buf() });
    }
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    match fs::rename(staged, target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!("Rename into '{}' crosses devices, copying instead", target.display());
            publish_by_copy(staged, target)
        }
        Err(e) => Err(e.into()),
    }
}

/// Bootstraps every top-level subdirectory of `template_root` under `destination_root`,
/// staging in the system temporary directory.
///
/// Files directly under `template_root` (such as `config.toml`) and symbolic
/// links are ignored. A failing subdirectory leaves nothing at its destination
/// and stops the run; subdirectories published before it are kept.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Published destination directories in order
pub fn bootstrap_project<P, Q>(
    renderer: &dyn TemplateRenderer,
    template_root: P,
    destination_root: Q,
) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    bootstrap_project_in(renderer, template_root, destination_root, std::env::temp_dir())
}

/// Same as [`bootstrap_project`], with scratch directories created under `scratch_root`.
///
/// Every scratch directory is removed once its subdirectory is published or
/// has failed.
pub fn bootstrap_project_in<P, Q, R>(
    renderer: &dyn TemplateRenderer,
    template_root: P,
    destination_root: Q,
    scratch_root: R,
) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let template_root = template_root.as_ref();
    let destination_root = destination_root.as_ref();
    let mut published = Vec::new();

    for child in read_children(template_root)? {
        if !child.file_type().is_dir() {
            continue;
        }

        let (_scratch, staged) = scratch_in(scratch_root.as_ref())?;
        debug!("Staging '{}' in '{}'", child.path().display(), staged.display());
        copy_tree(renderer, child.path(), &staged)?;

        let relative = child.path().strip_prefix(template_root).map_err(io::Error::other)?;
        let target = destination_root.join(render_path(renderer, relative)?);
        publish(&staged, &target)?;
        debug!("Published '{}'", target.display());

        published.push(target);
    }
    Ok(published)
}
