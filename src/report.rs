//! # Report Module
//!
//! Per-file outcomes and the totals collected over a run.

use std::fmt;

/// Possible outcomes for one processed file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
  /// The banner was inserted and the file rewritten
  Prepended,
  /// The file already carried the banner and was left untouched
  AlreadyPrepended,
  /// The file could not be read or written
  Failed,
}

/// Totals for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
  /// Number of regular files visited
  pub total: usize,
  /// Files that received the banner
  pub prepended: usize,
  /// Files that already had it
  pub already_prepended: usize,
  /// Files that failed to read or write
  pub failed: usize,
}

impl ProcessingSummary {
  /// Record the outcome for one file.
  pub const fn record(&mut self, action: FileAction) {
    self.total += 1;
    match action {
      FileAction::Prepended => self.prepended += 1,
      FileAction::AlreadyPrepended => self.already_prepended += 1,
      FileAction::Failed => self.failed += 1,
    }
  }
}

impl fmt::Display for ProcessingSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Processed {} {}: {} prepended, {} already prepended, {} failed",
      self.total,
      if self.total == 1 { "file" } else { "files" },
      self.prepended,
      self.already_prepended,
      self.failed
    )
  }
}
