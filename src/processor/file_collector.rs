//! # File Collector Module
//!
//! Recursive directory traversal that yields every regular file under a root.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error_log;

/// File collector for directory traversal.
///
/// Symlinks are not followed while walking. A symlink whose target is a
/// regular file counts as a regular file; links to directories and special
/// files are skipped.
pub struct FileCollector {
  /// Root directory to walk
  root: PathBuf,
}

impl FileCollector {
  /// Creates a new FileCollector for the given root directory.
  pub const fn new(root: PathBuf) -> Self {
    Self { root }
  }

  /// Root directory this collector walks.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Collects all regular files under the root.
  pub fn collect(&self) -> Vec<PathBuf> {
    self.traverse_directory(&self.root)
  }

  /// Traverses a directory recursively and collects all regular files, in the
  /// order the filesystem returns them.
  ///
  /// Entries that cannot be read are reported and skipped.
  pub fn traverse_directory(&self, dir: &Path) -> Vec<PathBuf> {
    debug!("Scanning directory: {}", dir.display());
    let start_time = std::time::Instant::now();

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1) {
      match entry {
        Ok(entry) => {
          if is_regular_file(&entry) {
            files.push(entry.into_path());
          }
        }
        Err(e) => {
          let path = e.path().unwrap_or(dir).display().to_string();
          error_log!("Unable to read directory {}: {}", path, e);
        }
      }
    }

    debug!(
      "Found {} files in {}ms",
      files.len(),
      start_time.elapsed().as_millis()
    );

    files
  }
}

fn is_regular_file(entry: &DirEntry) -> bool {
  let file_type = entry.file_type();
  if file_type.is_file() {
    return true;
  }
  // Links are classified by what they point at
  file_type.is_symlink() && entry.path().metadata().is_ok_and(|m| m.is_file())
}
