//! # Error Module
//!
//! Error types for the banner tool.
//!
//! [`PrependError`] covers failures that stop a run before any file is touched.
//! [`FileError`] covers failures scoped to a single file; those are reported
//! and the run moves on to the next file.

use std::path::{Path, PathBuf};

/// Fatal errors raised before traversal starts.
#[derive(Debug, thiserror::Error)]
pub enum PrependError {
  /// The root path does not name an existing directory.
  #[error("{} is not a valid directory", .path.display())]
  NotADirectory { path: PathBuf },
}

/// Per-file errors. Never abort the traversal.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
  /// The file could not be opened or read.
  #[error("Unable to open file {}", .path.display())]
  Read { path: PathBuf, source: std::io::Error },

  /// The rewritten contents could not be written back.
  #[error("Unable to open file {} for writing", .path.display())]
  Write { path: PathBuf, source: std::io::Error },
}

impl FileError {
  /// Path of the file the error refers to.
  pub fn path(&self) -> &Path {
    match self {
      Self::Read { path, .. } | Self::Write { path, .. } => path,
    }
  }
}
