//! # File I/O Module
//!
//! Synchronous file operations used by the stamper.

use std::fs::{self, File};
use std::io::{BufWriter, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::trace;

/// File I/O operations for the stamper.
pub struct FileIO;

impl FileIO {
  /// Writes `header` followed by the full original content of `path` into a
  /// sibling temp file, then renames the temp file over `path`.
  ///
  /// The original bytes are copied verbatim, so line endings and non-UTF-8
  /// content survive. The original permissions are carried over to the
  /// replacement. If anything fails before the rename the original file is
  /// left as it was and the temp file is removed when dropped.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to rewrite
  /// * `header` - Bytes to place in front of the original content
  pub fn prepend_atomically(path: &Path, header: &[u8]) -> Result<()> {
    let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let metadata = fs::metadata(path).with_context(|| format!("Failed to stat file: {}", path.display()))?;
    let mut original = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mut temp =
      NamedTempFile::new_in(dir).with_context(|| format!("Failed to create temp file in: {}", dir.display()))?;
    trace!("Writing {} via {}", path.display(), temp.path().display());

    {
      let mut writer = BufWriter::new(temp.as_file_mut());
      writer
        .write_all(header)
        .with_context(|| format!("Failed to write header for: {}", path.display()))?;
      std::io::copy(&mut original, &mut writer).with_context(|| format!("Failed to copy file: {}", path.display()))?;
      writer
        .flush()
        .with_context(|| format!("Failed to flush temp file for: {}", path.display()))?;
    }
    drop(original);

    fs::set_permissions(temp.path(), metadata.permissions())
      .with_context(|| format!("Failed to copy permissions for: {}", path.display()))?;

    temp
      .persist(path)
      .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
  }

  /// Reads a file as text, replacing invalid UTF-8 sequences.
  pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_prepend_atomically_keeps_original_bytes() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("blob.c");
    let original: &[u8] = b"int a;\r\nint b;\n\xff\xfe";
    fs::write(&path, original).unwrap();

    FileIO::prepend_atomically(&path, b"/* hi */\n").unwrap();

    let mut expected = b"/* hi */\n".to_vec();
    expected.extend_from_slice(original);
    assert_eq!(fs::read(&path).unwrap(), expected);
  }

  #[test]
  fn test_prepend_atomically_leaves_no_temp_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("a.h");
    fs::write(&path, "#pragma once\n").unwrap();

    FileIO::prepend_atomically(&path, b"// x\n").unwrap();

    let names: Vec<_> = fs::read_dir(temp_dir.path())
      .unwrap()
      .map(|e| e.unwrap().file_name())
      .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("a.h")]);
  }

  #[test]
  fn test_prepend_atomically_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = FileIO::prepend_atomically(&temp_dir.path().join("gone.c"), b"x").unwrap_err();
    assert!(err.to_string().contains("gone.c"));
  }

  #[cfg(unix)]
  #[test]
  fn test_prepend_atomically_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("tool.m");
    fs::write(&path, "@end\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

    FileIO::prepend_atomically(&path, b"// x\n").unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o755);
  }
}
