//! # stamp-copyright
//!
//! Prepends the copyright banner to every C, C++ and Objective-C source file
//! under `./code`.

use anyhow::Result;
use srctools::cli::{StampCli, run_stamp};

fn main() -> Result<()> {
  run_stamp(StampCli::parse_args())
}
