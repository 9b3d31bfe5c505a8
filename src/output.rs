//! # Output Module
//!
//! User-facing lines whose format other tooling may depend on. These are
//! printed plain, without colors, and are not silenced by `--quiet`.

use crate::relink::Replacement;

/// Print the record of one rewritten link.
///
/// This line is the only place the old target survives once the link has
/// been replaced.
pub fn print_replacement(replacement: &Replacement) {
  println!("{}", replacement);
}

/// Print a usage line to stdout.
pub fn print_usage(usage: &str) {
  println!("{}", usage.trim_end());
}
