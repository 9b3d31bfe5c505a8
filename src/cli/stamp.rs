//! # Stamp Command
//!
//! Entry point of `stamp-copyright`. The root directory and the stamped
//! extensions are fixed; only output and dry-run behavior can be chosen.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use super::{CUSTOM_STYLES, OutputArgs};
use crate::stamper::{Stamper, StamperConfig};

/// Prepend the copyright banner to every .c, .m, .cpp, .h and .inl file
/// under ./code
#[derive(Parser, Debug)]
#[command(
  name = "stamp-copyright",
  author,
  version,
  styles = CUSTOM_STYLES,
  after_help = "Files are rewritten in place. Running the tool twice stamps the banner twice.

Examples:
  # Preview which files would be stamped
  stamp-copyright --dry-run

  # Preview the exact change
  stamp-copyright --dry-run --show-diff
"
)]
pub struct StampCli {
  /// Only report which files would be stamped, without modifying them
  #[arg(long)]
  pub dry_run: bool,

  /// Print a diff of each change (requires --dry-run)
  #[arg(long, requires = "dry_run")]
  pub show_diff: bool,

  #[command(flatten)]
  pub output: OutputArgs,
}

impl StampCli {
  /// Parse CLI arguments and return the StampCli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  fn to_config(&self) -> StamperConfig {
    StamperConfig {
      dry_run: self.dry_run,
      show_diff: self.show_diff,
      ..StamperConfig::default()
    }
  }
}

/// Run the stamper with the given arguments.
pub fn run_stamp(cli: StampCli) -> Result<()> {
  cli.output.init();

  let config = cli.to_config();
  debug!("Stamping under {}", config.root.display());

  let outcome = Stamper::new(config).run()?;
  debug!(
    "Visited {} directories, stamped {} files, skipped {}",
    outcome.directories_visited,
    outcome.files_stamped.len(),
    outcome.files_skipped
  );

  Ok(())
}
