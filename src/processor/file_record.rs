//! # File Record Module
//!
//! The transient per-file state built while one file is processed.

use std::path::{Path, PathBuf};

use super::content_transformer::ContentTransformer;
use super::file_io::FileIO;
use crate::error::FileError;

/// One file's contents and the banner decision made for it.
///
/// Created when the file is read and dropped once it has been rewritten or
/// skipped.
#[derive(Debug)]
pub struct FileRecord {
  path: PathBuf,
  contents: Vec<u8>,
  offset: usize,
  has_banner: bool,
}

impl FileRecord {
  /// Reads `path` and evaluates it.
  pub fn read(path: &Path) -> Result<Self, FileError> {
    let contents = FileIO::read_full_content(path)?;
    Ok(Self::from_contents(path.to_path_buf(), contents))
  }

  /// Evaluates contents that are already in memory.
  pub fn from_contents(path: PathBuf, contents: Vec<u8>) -> Self {
    let has_banner = ContentTransformer::has_banner(&contents);
    let offset = if has_banner {
      0
    } else {
      ContentTransformer::insertion_offset(&path, &contents)
    };
    Self {
      path,
      contents,
      offset,
      has_banner,
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn contents(&self) -> &[u8] {
    &self.contents
  }

  /// Byte offset where the banner will be inserted.
  pub const fn offset(&self) -> usize {
    self.offset
  }

  /// Whether the contents already carry the banner.
  pub const fn has_banner(&self) -> bool {
    self.has_banner
  }

  /// Contents with the banner spliced in at [`offset`](Self::offset).
  pub fn render(&self) -> Vec<u8> {
    ContentTransformer::splice(&self.contents, self.offset)
  }
}
