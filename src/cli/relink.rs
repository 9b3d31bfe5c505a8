//! # Relink Command
//!
//! Entry point of `relink-sysroot`.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use super::{CUSTOM_STYLES, OutputArgs};
use crate::output::print_usage;
use crate::relink::{RelinkConfig, Relinker};

/// Rewrite absolute symbolic links inside a sysroot into relative ones
#[derive(Parser, Debug)]
#[command(
  name = "relink-sysroot",
  author,
  version,
  styles = CUSTOM_STYLES,
  override_usage = "relink-sysroot [OPTIONS] <DIRECTORY>",
  after_help = "Absolute link targets are grafted under DIRECTORY and rewritten relative to the link.
Links that are already relative, and absolute targets that already start with DIRECTORY, are left alone.

Examples:
  # Relativize a sysroot in place
  relink-sysroot /opt/sysroots/armv7

  # Show what would change
  relink-sysroot --dry-run /opt/sysroots/armv7
"
)]
pub struct RelinkCli {
  /// Sysroot directory to process. Exactly one is accepted.
  #[arg(value_name = "DIRECTORY", required = false)]
  pub directories: Vec<PathBuf>,

  /// Only report which links would be rewritten, without modifying them
  #[arg(long)]
  pub dry_run: bool,

  #[command(flatten)]
  pub output: OutputArgs,
}

impl RelinkCli {
  /// Parse CLI arguments and return the RelinkCli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Returns the single directory argument, or `None` if zero or several
  /// were given.
  fn directory(&self) -> Option<&Path> {
    match self.directories.as_slice() {
      [directory] => Some(directory.as_path()),
      _ => None,
    }
  }

  fn usage() -> String {
    Self::command().render_usage().to_string()
  }
}

/// Run the relinker with the given arguments.
///
/// Exits the process with status 1 after printing the usage line when the
/// positional argument count is not exactly one.
pub fn run_relink(cli: RelinkCli) -> Result<()> {
  let Some(directory) = cli.directory() else {
    print_usage(&RelinkCli::usage());
    process::exit(1);
  };

  cli.output.init();

  let config = RelinkConfig {
    dry_run: cli.dry_run,
    ..RelinkConfig::new(directory)
  };
  Relinker::new(config).run()?;

  Ok(())
}
