//! # File I/O Module
//!
//! Reading and writing whole files for the processor.
//!
//! Files are rewritten in place: the existing inode is truncated and refilled,
//! so permissions, ownership and hard links stay as they were. Whether a file
//! can be rewritten depends on the file's own permissions, not its directory's.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::Path;

use tracing::trace;

use crate::error::FileError;

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the full contents of a file as raw bytes.
  pub fn read_full_content(path: &Path) -> Result<Vec<u8>, FileError> {
    fs::read(path).map_err(|source| FileError::Read {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Replaces the contents of `path` with `content`.
  ///
  /// Symlinks are resolved first so the link itself stays in place and its
  /// target is rewritten. Only call this once the caller has decided the file
  /// needs rewriting: opening truncates it.
  pub fn write_file(path: &Path, content: &[u8]) -> Result<(), FileError> {
    let write_err = |source: std::io::Error| FileError::Write {
      path: path.to_path_buf(),
      source,
    };

    let target = fs::canonicalize(path).map_err(write_err)?;
    let mut file = OpenOptions::new()
      .write(true)
      .truncate(true)
      .open(&target)
      .map_err(write_err)?;

    trace!("Writing {} bytes to {}", content.len(), target.display());
    file.write_all(content).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  /// Whether permission bits are enforced for this process (false for root).
  #[cfg(unix)]
  fn permissions_enforced(dir: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    let check = dir.join(".perm-check");
    fs::write(&check, "").expect("write");
    fs::set_permissions(&check, fs::Permissions::from_mode(0o444)).expect("chmod");
    let enforced = OpenOptions::new().write(true).open(&check).is_err();
    fs::set_permissions(&check, fs::Permissions::from_mode(0o644)).expect("chmod");
    fs::remove_file(&check).expect("remove");
    enforced
  }

  #[test]
  fn test_read_missing_file_is_read_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("missing.txt");
    let err = FileIO::read_full_content(&missing).expect_err("should fail");
    assert!(matches!(err, FileError::Read { .. }));
    assert_eq!(err.path(), missing.as_path());
  }

  #[test]
  fn test_write_replaces_contents_without_leftovers() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("a.txt");
    fs::write(&path, "old contents that are longer").expect("write");

    FileIO::write_file(&path, b"new").expect("write_file");

    assert_eq!(fs::read(&path).expect("read"), b"new");
    let entries: Vec<_> = fs::read_dir(dir.path()).expect("read_dir").collect();
    assert_eq!(entries.len(), 1);
  }

  #[cfg(unix)]
  #[test]
  fn test_write_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("run.sh");
    fs::write(&path, "echo hi").expect("write");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");

    FileIO::write_file(&path, b"echo bye").expect("write_file");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
  }

  #[cfg(unix)]
  #[test]
  fn test_write_keeps_hard_links_together() {
    use std::os::unix::fs::MetadataExt;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("file.txt");
    let link = dir.path().join("link.txt");
    fs::write(&path, "old").expect("write");
    fs::hard_link(&path, &link).expect("hard_link");
    let inode = fs::metadata(&path).expect("metadata").ino();

    FileIO::write_file(&path, b"new").expect("write_file");

    assert_eq!(fs::metadata(&path).expect("metadata").ino(), inode);
    assert_eq!(fs::read(&link).expect("read"), b"new");
  }

  #[cfg(unix)]
  #[test]
  fn test_write_through_symlink_keeps_link() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("real.txt");
    let link = dir.path().join("link.txt");
    fs::write(&target, "old").expect("write");
    std::os::unix::fs::symlink(&target, &link).expect("symlink");

    FileIO::write_file(&link, b"new").expect("write_file");

    assert!(fs::symlink_metadata(&link).expect("lstat").file_type().is_symlink());
    assert_eq!(fs::read(&target).expect("read"), b"new");
  }

  #[cfg(unix)]
  #[test]
  fn test_read_only_file_is_write_error_and_unchanged() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("tempdir");
    if !permissions_enforced(dir.path()) {
      eprintln!("skipping: permission bits are not enforced for this user");
      return;
    }
    let path = dir.path().join("ro.txt");
    fs::write(&path, "hello").expect("write");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).expect("chmod");

    let err = FileIO::write_file(&path, b"changed").expect_err("read-only file should fail");

    assert!(matches!(err, FileError::Write { .. }));
    assert_eq!(fs::read(&path).expect("read"), b"hello");
  }

  #[cfg(unix)]
  #[test]
  fn test_writable_file_in_read_only_directory_is_rewritten() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("tempdir");
    if !permissions_enforced(dir.path()) {
      eprintln!("skipping: permission bits are not enforced for this user");
      return;
    }
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).expect("mkdir");
    let path = sub.join("w.txt");
    fs::write(&path, "hello").expect("write");
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o555)).expect("chmod");

    let result = FileIO::write_file(&path, b"changed");
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).expect("chmod");

    result.expect("file itself is writable");
    assert_eq!(fs::read(&path).expect("read"), b"changed");
  }
}
