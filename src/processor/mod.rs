//! # Processor Module
//!
//! Walks a directory tree and prepends the banner to every regular file.
//!
//! The module is organized into several submodules:
//! - [`file_collector`] - Recursive directory traversal
//! - [`file_record`] - Per-file state and the banner decision
//! - [`content_transformer`] - Marker detection, insertion offset and splicing
//! - [`file_io`] - Whole-file reads and atomic writes
//!
//! The [`Processor`] struct is the main entry point, running files one at a
//! time in traversal order.

mod content_transformer;
mod file_collector;
mod file_io;
mod file_record;

use std::path::{Path, PathBuf};

pub use content_transformer::ContentTransformer;
pub use file_collector::FileCollector;
pub use file_io::FileIO;
pub use file_record::FileRecord;
use tracing::{debug, trace};

use crate::error::{FileError, PrependError};
use crate::report::{FileAction, ProcessingSummary};
use crate::{error_log, info_log, verbose_log};

/// Processor for prepending the banner to a directory tree.
///
/// Each file is read, checked for the marker and, when the marker is absent,
/// rewritten with the banner inserted. A failure on one file is reported and
/// the run continues with the next.
pub struct Processor {
  /// File collector for the root directory
  file_collector: FileCollector,
}

impl Processor {
  /// Creates a processor rooted at `root`.
  ///
  /// # Errors
  ///
  /// Returns [`PrependError::NotADirectory`] if `root` does not name an
  /// existing directory.
  pub fn new(root: impl Into<PathBuf>) -> Result<Self, PrependError> {
    let root = root.into();
    if !root.is_dir() {
      return Err(PrependError::NotADirectory { path: root });
    }
    Ok(Self {
      file_collector: FileCollector::new(root),
    })
  }

  /// Root directory being processed.
  pub fn root(&self) -> &Path {
    self.file_collector.root()
  }

  /// Processes every regular file under the root and returns the totals.
  pub fn process(&self) -> ProcessingSummary {
    let files = self.file_collector.collect();
    debug!("Processing {} files under {}", files.len(), self.root().display());

    let mut summary = ProcessingSummary::default();
    for path in &files {
      let action = match self.process_file(path) {
        Ok(action) => action,
        Err(e) => {
          error_log!("{}", e);
          debug!("{}: {:?}", e.path().display(), e);
          FileAction::Failed
        }
      };
      summary.record(action);
    }

    summary
  }

  /// Processes a single file.
  ///
  /// The marker check happens before anything is written, so a file that
  /// already has the banner is never modified.
  pub fn process_file(&self, path: &Path) -> Result<FileAction, FileError> {
    verbose_log!("Processing file: {}", path.display());

    let record = FileRecord::read(path)?;
    if record.has_banner() {
      info_log!("Already prepended to {}", path.display());
      return Ok(FileAction::AlreadyPrepended);
    }

    trace!(
      "Inserting banner at byte {} of {} in {}",
      record.offset(),
      record.contents().len(),
      path.display()
    );
    FileIO::write_file(path, &record.render())?;

    info_log!("Prepended to {}", path.display());
    Ok(FileAction::Prepended)
  }
}
