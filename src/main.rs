//! # lnear-banner
//!
//! Prepends the Lnear copyright banner to every file in a directory tree.

mod banner;
mod cli;
mod error;
mod logging;
mod processor;
mod report;

use anyhow::Result;

use crate::cli::{Cli, run_prepend};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run_prepend(cli.args)
}
