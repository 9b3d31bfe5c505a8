//! # Diff Module
//!
//! Renders the change a dry run would make to a file, so the banner
//! insertion can be reviewed before anything is written.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Lines of unchanged context kept around each change.
const CONTEXT_LINES: usize = 3;

/// Manages diff creation and rendering for dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffManager {
  /// Whether to print diffs at all
  pub show_diff: bool,
}

impl DiffManager {
  /// Creates a new DiffManager.
  pub const fn new(show_diff: bool) -> Self {
    Self { show_diff }
  }

  /// Prints the diff between `original` and `new` to stderr when enabled.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) {
    if !self.show_diff {
      return;
    }

    eprintln!("Diff for {}:", path.display());
    for line in render_diff(original, new).lines() {
      let styled = if line.starts_with('+') {
        format!("{}", line.if_supports_color(Stream::Stderr, |l| l.green()))
      } else if line.starts_with('-') {
        format!("{}", line.if_supports_color(Stream::Stderr, |l| l.red()))
      } else {
        line.to_string()
      };
      eprintln!("{}", styled);
    }
    eprintln!();
  }
}

/// Renders the changed hunks of a line diff, each line prefixed with
/// `+`, `-` or a space.
pub fn render_diff(original: &str, new: &str) -> String {
  let diff = TextDiff::from_lines(original, new);
  let mut rendered = String::new();

  for (idx, group) in diff.grouped_ops(CONTEXT_LINES).iter().enumerate() {
    if idx > 0 {
      rendered.push_str("...\n");
    }
    for op in group {
      for change in diff.iter_changes(op) {
        let sign = match change.tag() {
          ChangeTag::Delete => "-",
          ChangeTag::Insert => "+",
          ChangeTag::Equal => " ",
        };
        rendered.push_str(sign);
        rendered.push_str(&change.to_string_lossy());
        if change.missing_newline() {
          rendered.push('\n');
        }
      }
    }
  }

  rendered
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_render_diff_shows_inserted_lines() {
    let original = "int main() {}\n";
    let new = "/* banner */\nint main() {}\n";

    let rendered = render_diff(original, new);
    assert_eq!(rendered, "+/* banner */\n int main() {}\n");
  }

  #[test]
  fn test_render_diff_keeps_limited_context() {
    let original: String = (0..20).map(|i| format!("line {i}\n")).collect();
    let new = format!("/* banner */\n{original}");

    let rendered = render_diff(&original, &new);
    assert!(rendered.starts_with("+/* banner */\n"));
    assert!(rendered.contains(" line 2\n"));
    assert!(!rendered.contains("line 19"));
  }

  #[test]
  fn test_render_diff_identical_is_empty() {
    assert!(render_diff("same\n", "same\n").is_empty());
  }
}
