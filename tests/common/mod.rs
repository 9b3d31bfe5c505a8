#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Creates a symbolic link at `root/relative` pointing to `target`, creating
/// parent directories.
#[cfg(unix)]
pub fn make_link(root: &Path, relative: &str, target: impl AsRef<Path>) -> Result<()> {
  let link = root.join(relative);
  if let Some(parent) = link.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  std::os::unix::fs::symlink(target.as_ref(), &link).with_context(|| format!("Failed to link {}", link.display()))
}

/// Reads the literal target of the link at `root/relative`.
pub fn link_target(root: &Path, relative: &str) -> Result<std::path::PathBuf> {
  let link = root.join(relative);
  fs::read_link(&link).with_context(|| format!("Failed to read link {}", link.display()))
}
