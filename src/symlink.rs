//! Small utilities for working with symbolic links.
//!
//! These helpers keep the platform distinctions in one place. They return
//! `io::Result` and propagate the underlying OS error unchanged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Create a symbolic link at `link` that points to `target`.
///
/// On Unix this delegates to `std::os::unix::fs::symlink`. On Windows the
/// link kind is chosen from whether `target`, resolved against the link's
/// directory, is a directory; a dangling target gets a file link.
pub fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
  #[cfg(unix)]
  {
    std::os::unix::fs::symlink(target, link)
  }

  #[cfg(windows)]
  {
    use std::os::windows::fs::{symlink_dir, symlink_file};

    let resolved = match link.parent() {
      Some(dir) => dir.join(target),
      None => target.to_path_buf(),
    };
    if resolved.is_dir() {
      symlink_dir(target, link)
    } else {
      symlink_file(target, link)
    }
  }
}

/// Read the target of a symbolic link without resolving it.
pub fn read_symlink(link: &Path) -> io::Result<PathBuf> {
  fs::read_link(link)
}

/// Remove the symbolic link at `link`, never its target.
pub fn remove_symlink(link: &Path) -> io::Result<()> {
  #[cfg(unix)]
  {
    fs::remove_file(link)
  }

  #[cfg(windows)]
  {
    // Directory links must be removed with remove_dir.
    fs::remove_file(link).or_else(|_| fs::remove_dir(link))
  }
}

/// Replaces the link at `link` with one pointing to `target`.
///
/// The old link is removed first; if creating the new one fails the path is
/// left without a link.
pub fn replace_symlink(link: &Path, target: &Path) -> io::Result<()> {
  remove_symlink(link)?;
  create_symlink(target, link)
}
