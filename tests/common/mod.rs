#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lnear_banner::banner::BANNER;

/// Writes `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

/// Sets unix permission bits on `path`.
#[cfg(unix)]
pub fn chmod(path: &Path, mode: u32) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  fs::set_permissions(path, fs::Permissions::from_mode(mode))
    .with_context(|| format!("Failed to chmod {}", path.display()))
}

/// Whether permission bits are enforced for the current user.
///
/// Returns `false` when running as root, where a read-only file can still be
/// opened for writing.
#[cfg(unix)]
pub fn permissions_enforced(dir: &Path) -> Result<bool> {
  let check = write_file(dir, ".perm-check", "")?;
  chmod(&check, 0o444)?;
  let enforced = fs::OpenOptions::new().write(true).open(&check).is_err();
  chmod(&check, 0o644)?;
  fs::remove_file(&check).context("Failed to remove permission check file")?;
  Ok(enforced)
}

/// Reads a file as a UTF-8 string.
pub fn read_file(path: &Path) -> Result<String> {
  fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Expected contents after the banner is spliced between `head` and `tail`.
pub fn with_banner(head: &str, tail: &str) -> String {
  format!("{head}\n{BANNER}\n{tail}")
}

/// Builds a small project tree with nested directories and mixed file types.
///
/// Returns the paths of all regular files created.
pub fn create_sample_tree(root: &Path) -> Result<Vec<PathBuf>> {
  let files = vec![
    write_file(root, "index.ts", "export const a = 1;\n")?,
    write_file(root, "src/colors/index.ts", "export const red = '#f00';\n")?,
    write_file(root, "php/Marco.php", "<?php\n\nnamespace Lnear;\n")?,
    write_file(root, "php/Data/Manager.php", "<?php\nclass Manager {}\n")?,
    write_file(root, "scripts/generate.js", "console.log('hi');\n")?,
  ];
  fs::create_dir_all(root.join("empty/nested")).context("Failed to create empty dirs")?;
  Ok(files)
}
