//! # srctools
//!
//! Two small source tree maintenance tools sharing one crate:
//!
//! * `stamp-copyright` walks `./code` and prepends a fixed copyright banner to
//!   every `.c`, `.m`, `.cpp`, `.h` and `.inl` file, replacing each file
//!   atomically.
//! * `relink-sysroot` walks a sysroot and rewrites absolute symbolic links
//!   into relative ones so the tree can be relocated.
//!
//! Both are single-pass, single-threaded traversals that stop at the first
//! error.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use srctools::relink::{RelinkConfig, Relinker};
//! use srctools::stamper::{Stamper, StamperConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     // Stamp a tree other than the default ./code
//!     let outcome = Stamper::new(StamperConfig::new("vendor/src")).run()?;
//!     println!("Stamped {} files", outcome.files_stamped.len());
//!
//!     // Relativize a sysroot
//!     let outcome = Relinker::new(RelinkConfig::new("/opt/sysroots/armv7")).run()?;
//!     println!("Rewrote {} links", outcome.replacements.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`stamper`] - Banner stamping
//! * [`relink`] - Symlink relativization
//! * [`walk`] - Root resolution and traversal shared by both
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`stamper`]: crate::stamper
//! [`relink`]: crate::relink
//! [`walk`]: crate::walk
//! [`logging`]: crate::logging

pub mod cli;
pub mod diff;
pub mod file_filter;
pub mod logging;
pub mod output;
pub mod relink;
pub mod stamper;
pub mod symlink;
pub mod walk;
