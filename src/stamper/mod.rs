//! # Stamper Module
//!
//! Prepends the copyright banner to every matching source file under a root
//! directory.
//!
//! The module is organized into several submodules:
//! - [`banner`] - The fixed banner text
//! - [`file_io`] - Temp-file-and-rename rewriting
//!
//! The [`Stamper`] struct is the main entry point. Files are collected first
//! and rewritten afterwards, so a replaced file is never seen twice by the
//! directory listing that produced it.

pub mod banner;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::Result;
pub use banner::{BANNER, count_leading_banners};
pub use file_io::FileIO;
use tracing::{debug, trace};

use crate::diff::DiffManager;
use crate::file_filter::{DEFAULT_EXTENSIONS, FileFilter, SuffixFilter};
use crate::walk::{resolve_root, walk_tree};
use crate::{info_log, verbose_log};

/// Root directory stamped by the command-line tool, relative to the working
/// directory.
pub const DEFAULT_ROOT: &str = "code";

/// Configuration for creating a [`Stamper`].
#[derive(Debug, Clone)]
pub struct StamperConfig {
  /// Directory to traverse
  pub root: PathBuf,
  /// File name suffixes to stamp, leading dot included
  pub extensions: Vec<String>,
  /// Text written in front of each matching file
  pub banner: String,
  /// Only report what would be stamped
  pub dry_run: bool,
  /// Print a diff of each change during a dry run
  pub show_diff: bool,
}

impl StamperConfig {
  /// Creates a config for `root` with the default extensions and banner.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```
  /// use srctools::stamper::StamperConfig;
  ///
  /// let config = StamperConfig {
  ///   dry_run: true,
  ///   ..StamperConfig::new("vendor/src")
  /// };
  /// assert!(config.extensions.iter().any(|e| e == ".cpp"));
  /// ```
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      extensions: DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
      banner: BANNER.to_string(),
      dry_run: false,
      show_diff: false,
    }
  }
}

impl Default for StamperConfig {
  fn default() -> Self {
    Self::new(DEFAULT_ROOT)
  }
}

/// What a stamper run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StampOutcome {
  /// Number of directories visited, the root included
  pub directories_visited: usize,
  /// Files that received the banner (or would have, in a dry run)
  pub files_stamped: Vec<PathBuf>,
  /// Regular files left alone because of their extension
  pub files_skipped: usize,
}

/// Stamps the copyright banner onto source files.
pub struct Stamper {
  root: PathBuf,
  filter: SuffixFilter,
  banner: String,
  dry_run: bool,
  diff_manager: DiffManager,
}

impl Stamper {
  /// Creates a new stamper from the given configuration.
  pub fn new(config: StamperConfig) -> Self {
    Self {
      root: config.root,
      filter: SuffixFilter::new(config.extensions),
      banner: config.banner,
      dry_run: config.dry_run,
      diff_manager: DiffManager::new(config.show_diff),
    }
  }

  /// Traverses the root and stamps every matching regular file.
  ///
  /// # Errors
  ///
  /// Returns an error if the root does not exist or is not a directory, if a
  /// directory cannot be listed, or if any file cannot be read, written or
  /// replaced. The run stops at the first error; files stamped before it
  /// keep their banner.
  pub fn run(&self) -> Result<StampOutcome> {
    resolve_root(&self.root)?;

    let mut outcome = StampOutcome::default();
    let files = self.collect_files(&mut outcome)?;
    debug!("Found {} files to stamp under {}", files.len(), self.root.display());

    for path in files {
      self.stamp(&path)?;
      outcome.files_stamped.push(path);
    }

    Ok(outcome)
  }

  fn collect_files(&self, outcome: &mut StampOutcome) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in walk_tree(&self.root) {
      let entry = entry?;
      let file_type = entry.file_type();

      if file_type.is_dir() {
        outcome.directories_visited += 1;
        info_log!("Found directory: {}", entry.path().display());
      } else if file_type.is_file() {
        let result = self.filter.should_process(entry.path());
        if result.should_process {
          files.push(entry.into_path());
        } else {
          outcome.files_skipped += 1;
        }
      } else {
        trace!("Skipping: {} (not a regular file)", entry.path().display());
      }
    }

    Ok(files)
  }

  fn stamp(&self, path: &Path) -> Result<()> {
    if self.dry_run {
      if self.diff_manager.show_diff {
        let original = FileIO::read_lossy(path)?;
        let stamped = format!("{}{}", self.banner, original);
        self.diff_manager.display_diff(path, &original, &stamped);
      }
      info_log!("Would stamp: {}", path.display());
      return Ok(());
    }

    verbose_log!("Stamping: {}", path.display());
    stamp_file(path, &self.banner)?;
    info_log!("Stamped: {}", path.display());
    Ok(())
  }
}

/// Prepends `banner` to the file at `path`, replacing it atomically.
///
/// No check is made for an existing banner; stamping twice yields two.
pub fn stamp_file(path: &Path, banner: &str) -> Result<()> {
  FileIO::prepend_atomically(path, banner.as_bytes())
}
