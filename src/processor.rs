//! Renders a template directory tree into a destination directory.

use crate::error::{Error, Result};
use crate::renderer::{render_path, TemplateRenderer};
use log::{debug, warn};
use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Lists the immediate children of `dir` sorted by name, without following links.
pub(crate) fn read_children(dir: &Path) -> Result<Vec<DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(|e| Error::IoError(e.into())))
        .collect()
}

/// Renders `source` line by line into a newly created `target`.
///
/// Each line is substituted on its own, so a directive never spans lines.
/// The target must not exist yet.
fn render_file(renderer: &dyn TemplateRenderer, source: &Path, target: &Path) -> Result<()> {
    let mut reader = BufReader::new(File::open(source)?);
    let mut writer =
        BufWriter::new(OpenOptions::new().write(true).create_new(true).open(target)?);

    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        writer.write_all(renderer.render(&line)?.as_bytes())?;
        line.clear();
    }
    writer.flush()?;
    Ok(())
}

/// Renders every regular file under `src_dir` into `dst_dir`.
///
/// The tree is walked breadth-first. Symbolic links are skipped entirely,
/// directories are queued and files are written right away to `dst_dir`
/// joined with their rendered relative path. Missing parent directories are
/// created on demand, so directories without files are not reproduced.
///
/// The first failure aborts the walk; files already written stay on disk.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Written files in creation order
pub fn copy_tree<P, Q>(
    renderer: &dyn TemplateRenderer,
    src_dir: P,
    dst_dir: Q,
) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let src_dir = src_dir.as_ref();
    let dst_dir = dst_dir.as_ref();
    let mut written = Vec::new();
    let mut queue = VecDeque::from([src_dir.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        for entry in read_children(&dir)? {
            let file_type = entry.file_type();
            if file_type.is_symlink() {
                warn!("Skipping symbolic link: {}", entry.path().display());
            } else if file_type.is_dir() {
                queue.push_back(entry.into_path());
            } else if file_type.is_file() {
                let relative = entry.path().strip_prefix(src_dir).map_err(io::Error::other)?;
                let target = dst_dir.join(render_path(renderer, relative)?);
                debug!("Rendering '{}' to '{}'", entry.path().display(), target.display());

                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                render_file(renderer, entry.path(), &target)?;
                written.push(target);
            }
        }
    }
    Ok(written)
}
