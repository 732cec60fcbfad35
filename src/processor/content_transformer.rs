//! # Content Transformer Module
//!
//! Decides whether file contents already carry the banner, where the banner
//! goes, and builds the rewritten contents.
//!
//! All functions work on raw bytes so files in any encoding are spliced
//! byte-for-byte.

use std::path::Path;

use memchr::memmem;

use crate::banner::{BANNER, MARKER, PHP_OPEN_TAG, PHP_SUFFIX};

/// Content transformation utilities for banner insertion.
pub struct ContentTransformer;

impl ContentTransformer {
  /// Returns `true` if the marker phrase appears anywhere in `contents`.
  pub fn has_banner(contents: &[u8]) -> bool {
    memmem::find(contents, MARKER.as_bytes()).is_some()
  }

  /// Returns `true` if the file name ends with `.php` (case-sensitive).
  pub fn is_php(path: &Path) -> bool {
    path
      .file_name()
      .is_some_and(|name| name.as_encoded_bytes().ends_with(PHP_SUFFIX.as_bytes()))
  }

  /// Computes the byte offset at which the banner is inserted.
  ///
  /// For PHP files this is just past the first `<?php` tag; everything else,
  /// including PHP files without the tag, gets offset 0.
  pub fn insertion_offset(path: &Path, contents: &[u8]) -> usize {
    if !Self::is_php(path) {
      return 0;
    }
    memmem::find(contents, PHP_OPEN_TAG.as_bytes()).map_or(0, |start| start + PHP_OPEN_TAG.len())
  }

  /// Builds `contents[..offset] + "\n" + BANNER + "\n" + contents[offset..]`.
  ///
  /// `offset` is clamped to the content length.
  pub fn splice(contents: &[u8], offset: usize) -> Vec<u8> {
    let offset = offset.min(contents.len());
    let (head, tail) = contents.split_at(offset);

    let mut out = Vec::with_capacity(contents.len() + BANNER.len() + 2);
    out.extend_from_slice(head);
    out.push(b'\n');
    out.extend_from_slice(BANNER.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(tail);
    out
  }
}
