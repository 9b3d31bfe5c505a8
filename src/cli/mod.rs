//! # CLI Module
//!
//! Command-line interfaces for the two tools. Both use clap for argument
//! parsing and share the output flags and help styling defined here.

mod relink;
mod stamp;

use clap::Args;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use relink::{RelinkCli, run_relink};
pub use stamp::{StampCli, run_stamp};

use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Output flags shared by both tools.
#[derive(Args, Debug)]
pub struct OutputArgs {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress informational output
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl OutputArgs {
  /// Installs the tracing subscriber and the global output and color modes.
  pub fn init(&self) {
    init_tracing(self.quiet, self.verbose);

    if self.verbose > 0 {
      set_verbose();
    } else if self.quiet {
      set_quiet();
    }
    self.colors.apply();
  }
}
