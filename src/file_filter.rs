//! # File Filter Module
//!
//! Components deciding which files the stamper rewrites.

use std::path::Path;

use crate::verbose_log;

/// Source extensions stamped when no other list is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".c", ".m", ".cpp", ".h", ".inl"];

/// Result of a file filtering operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter {
  /// Determines whether a file should be processed.
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Filter that accepts files whose name ends with one of a set of suffixes.
///
/// Matching is a plain, case-sensitive suffix test on the file name, so
/// `Main.CPP` is not matched by `.cpp` and `foo.tar.h` is matched by `.h`.
#[derive(Debug, Clone)]
pub struct SuffixFilter {
  suffixes: Vec<String>,
}

impl SuffixFilter {
  /// Creates a filter for the given suffixes (leading dot included).
  pub fn new<I, S>(suffixes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      suffixes: suffixes.into_iter().map(Into::into).collect(),
    }
  }

  /// Returns `true` if `file_name` ends with one of the configured suffixes.
  pub fn matches_name(&self, file_name: &str) -> bool {
    matches_extension(file_name, &self.suffixes)
  }
}

impl Default for SuffixFilter {
  fn default() -> Self {
    Self::new(DEFAULT_EXTENSIONS.iter().copied())
  }
}

impl FileFilter for SuffixFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    let Some(file_name) = path.file_name() else {
      return FilterResult::skip("No file name");
    };

    if self.matches_name(&file_name.to_string_lossy()) {
      FilterResult::process()
    } else {
      verbose_log!("Skipping: {} (extension not stamped)", path.display());
      FilterResult::skip("Extension not stamped")
    }
  }
}

/// Case-sensitive suffix check of `file_name` against `extensions`.
pub fn matches_extension<S: AsRef<str>>(file_name: &str, extensions: &[S]) -> bool {
  extensions.iter().any(|ext| file_name.ends_with(ext.as_ref()))
}
