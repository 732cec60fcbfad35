//! # Prepend Command
//!
//! Wires the processor to the console: sets up logging, validates the root
//! directory, runs the traversal and prints the closing line.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::processor::Processor;
use crate::{info_log, verbose_log};

/// Arguments for the prepend command
#[derive(Args, Debug)]
pub struct PrependArgs {
  /// Directory to process recursively
  #[arg(value_name = "DIRECTORY")]
  pub directory: PathBuf,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
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

/// Run the prepend command with the given arguments.
///
/// Fails only when the root is not a directory. Per-file failures are
/// reported as they happen and do not affect the result.
pub fn run_prepend(args: PrependArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let processor = Processor::new(args.directory)?;

  let start_time = Instant::now();
  let summary = processor.process();
  debug!("Finished in {}ms", start_time.elapsed().as_millis());

  verbose_log!("{}", summary);
  info_log!("Copyright information prepended successfully.");

  Ok(())
}
