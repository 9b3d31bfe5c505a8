//! # Relink Module
//!
//! Rewrites absolute symbolic links inside a sysroot into relative ones so
//! the tree can be moved.
//!
//! For every link whose target is absolute, the target is grafted under the
//! root (`root + target`) and re-expressed relative to the directory holding
//! the link. Two kinds of links are left alone:
//! - links whose target is already relative
//! - links whose absolute target already starts with the root path string
//!
//! The second rule is a plain string prefix test on the resolved root, so
//! `/sysroot-old/lib` is treated as inside `/sysroot`.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, trace};

use crate::output::print_replacement;
use crate::symlink::{read_symlink, replace_symlink};
use crate::walk::{normalize_path, resolve_root, walk_tree};

/// Configuration for a relink run.
#[derive(Debug, Clone)]
pub struct RelinkConfig {
  /// Sysroot directory to traverse
  pub root: PathBuf,
  /// Only report the links that would be rewritten
  pub dry_run: bool,
}

impl RelinkConfig {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      dry_run: false,
    }
  }
}

/// What to do with a single symbolic link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDecision {
  /// The target is relative; nothing to do.
  AlreadyRelative,
  /// The absolute target already starts with the root; left as is.
  InsideRoot,
  /// The link should be recreated pointing at `new_target`.
  Rewrite { new_target: PathBuf },
}

/// One rewritten link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
  pub link: PathBuf,
  pub old_target: PathBuf,
  pub new_target: PathBuf,
}

impl fmt::Display for Replacement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "\t{} replacing {} => {}",
      self.link.display(),
      self.old_target.display(),
      self.new_target.display()
    )
  }
}

/// What a relink run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelinkOutcome {
  /// Number of symbolic links inspected
  pub links_seen: usize,
  /// Links that were rewritten (or would have been, in a dry run)
  pub replacements: Vec<Replacement>,
}

/// Decides what to do with the link at `link` whose literal target is
/// `target`, for an absolute, normalized `root`.
///
/// No filesystem access happens here.
///
/// # Errors
///
/// Returns an error if `link` has no parent directory or if no relative path
/// between the link directory and the new target exists.
pub fn plan_link(root: &Path, link: &Path, target: &Path) -> Result<LinkDecision> {
  if !target.has_root() {
    return Ok(LinkDecision::AlreadyRelative);
  }

  if target.to_string_lossy().starts_with(&*root.to_string_lossy()) {
    return Ok(LinkDecision::InsideRoot);
  }

  let combined = normalize_path(&root.join(strip_root(target)));
  let link_dir = link
    .parent()
    .map(normalize_path)
    .ok_or_else(|| anyhow!("Link has no parent directory: {}", link.display()))?;

  let new_target = pathdiff::diff_paths(&combined, &link_dir).ok_or_else(|| {
    anyhow!(
      "Cannot express {} relative to {}",
      combined.display(),
      link_dir.display()
    )
  })?;

  let new_target = if new_target.as_os_str().is_empty() {
    PathBuf::from(".")
  } else {
    new_target
  };

  Ok(LinkDecision::Rewrite { new_target })
}

/// Drops the root and any prefix from an absolute path, keeping the rest.
fn strip_root(path: &Path) -> PathBuf {
  path
    .components()
    .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
    .collect()
}

/// Rewrites absolute symbolic links under a sysroot.
pub struct Relinker {
  root: PathBuf,
  dry_run: bool,
}

impl Relinker {
  pub fn new(config: RelinkConfig) -> Self {
    Self {
      root: config.root,
      dry_run: config.dry_run,
    }
  }

  /// Traverses the root and rewrites every qualifying link, printing one
  /// line per rewrite.
  ///
  /// # Errors
  ///
  /// Returns an error if the root does not exist or is not a directory, or
  /// if a directory cannot be listed or a link cannot be read, removed or
  /// recreated. The run stops at the first error.
  pub fn run(&self) -> Result<RelinkOutcome> {
    let root = resolve_root(&self.root)?;
    let mut outcome = RelinkOutcome::default();

    for entry in walk_tree(&root) {
      let entry = entry?;
      if !entry.path_is_symlink() {
        continue;
      }
      outcome.links_seen += 1;

      let link = entry.path();
      let old_target = read_symlink(link).with_context(|| format!("Failed to read link: {}", link.display()))?;

      match plan_link(&root, link, &old_target)? {
        LinkDecision::AlreadyRelative => {
          trace!("Skipping: {} (relative target)", link.display());
        }
        LinkDecision::InsideRoot => {
          trace!("Skipping: {} (target already under root)", link.display());
        }
        LinkDecision::Rewrite { new_target } => {
          if self.dry_run {
            debug!("Dry run, leaving {} in place", link.display());
          } else {
            replace_symlink(link, &new_target).with_context(|| format!("Failed to replace link: {}", link.display()))?;
          }

          let replacement = Replacement {
            link: link.to_path_buf(),
            old_target,
            new_target,
          };
          print_replacement(&replacement);
          outcome.replacements.push(replacement);
        }
      }
    }

    debug!(
      "Inspected {} links, rewrote {}",
      outcome.links_seen,
      outcome.replacements.len()
    );
    Ok(outcome)
  }
}
