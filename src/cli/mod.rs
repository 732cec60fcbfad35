//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod prepend;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use prepend::{PrependArgs, run_prepend};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

const LONG_VERSION: &str = concat!(
  env!("CARGO_PKG_VERSION"),
  " (",
  env!("GIT_HASH"),
  " ",
  env!("GIT_DATE"),
  ")"
);

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  long_version = LONG_VERSION,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Prepend the banner to every file under src/
  lnear-banner src/

  # Show each file as it is processed
  lnear-banner -v php/

  # Only report errors
  lnear-banner --quiet .
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub args: PrependArgs,
}

impl Cli {
  /// Parse CLI arguments.
  ///
  /// Usage errors (missing or extra arguments) print clap's message with a
  /// usage line to stderr and exit with status 1. `--help` and `--version`
  /// exit with status 0.
  pub fn parse_args() -> Self {
    match Self::try_parse() {
      Ok(cli) => cli,
      Err(e) if e.use_stderr() => {
        // Exiting either way; a failed write to stderr has nowhere to go
        e.print().ok();
        std::process::exit(1);
      }
      Err(e) => e.exit(),
    }
  }
}
