//! # relink-sysroot
//!
//! Rewrites absolute symbolic links inside a sysroot into relative ones.

use anyhow::Result;
use srctools::cli::{RelinkCli, run_relink};

fn main() -> Result<()> {
  run_relink(RelinkCli::parse_args())
}
