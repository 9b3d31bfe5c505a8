//! # Walk Module
//!
//! Root resolution and recursive traversal shared by both tools.
//!
//! Traversal never follows symbolic links: a link to a directory is reported
//! as a link entry and its target is not descended into.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Errors raised while validating a traversal root.
#[derive(Debug, thiserror::Error)]
pub enum RootError {
  /// The root path does not exist.
  #[error("Root directory does not exist: {}", .0.display())]
  NotFound(PathBuf),

  /// The root path exists but is not a directory.
  #[error("Root is not a directory: {}", .0.display())]
  NotADirectory(PathBuf),
}

/// Converts a potentially relative path to an absolute path.
///
/// # Parameters
///
/// * `path` - The path to absolutize
///
/// # Returns
///
/// The absolute path. Symbolic links are not resolved.
pub fn absolutize_path(path: &Path) -> Result<PathBuf> {
  if path.is_absolute() {
    Ok(path.to_path_buf())
  } else {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;
    Ok(current_dir.join(path))
  }
}

/// Lexically normalizes a path by dropping `.` segments and resolving `..`
/// against the preceding component.
///
/// No filesystem access happens here, so `..` after a symlinked directory
/// is collapsed textually. A `..` that would climb above the root of an
/// absolute path is dropped; on a relative path it is kept.
///
/// # Examples
/// - `/sysroot/usr/../lib` -> `/sysroot/lib`
/// - `/sysroot/./a/b` -> `/sysroot/a/b`
/// - `../a/b` -> `../a/b`
pub fn normalize_path(path: &Path) -> PathBuf {
  let mut normalized = PathBuf::new();

  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => match normalized.components().next_back() {
        Some(Component::Normal(_)) => {
          normalized.pop();
        }
        Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
        _ => normalized.push(".."),
      },
      other => normalized.push(other.as_os_str()),
    }
  }

  if normalized.as_os_str().is_empty() {
    PathBuf::from(".")
  } else {
    normalized
  }
}

/// Resolves a traversal root to an absolute, normalized directory path.
///
/// # Errors
///
/// Returns [`RootError::NotFound`] if the path does not exist and
/// [`RootError::NotADirectory`] if it is not a directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
  let absolute = normalize_path(&absolutize_path(root)?);

  let metadata = match std::fs::metadata(&absolute) {
    Ok(metadata) => metadata,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(RootError::NotFound(absolute).into()),
    Err(e) => return Err(e).with_context(|| format!("Failed to stat root: {}", absolute.display())),
  };

  if !metadata.is_dir() {
    return Err(RootError::NotADirectory(absolute).into());
  }

  debug!("Resolved root: {}", absolute.display());
  Ok(absolute)
}

/// Walks every entry below `root`, the root itself included, without
/// following symbolic links.
///
/// Order follows the underlying directory listing and is not stable. The
/// first I/O error ends the walk.
pub fn walk_tree(root: &Path) -> impl Iterator<Item = Result<DirEntry>> + '_ {
  WalkDir::new(root).follow_links(false).into_iter().map(move |entry| {
    entry.with_context(|| format!("Failed to traverse directory: {}", root.display()))
  })
}
