use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use srctools::stamper::BANNER;
use tempfile::tempdir;

mod common;

use common::write_file;

#[test]
fn test_relink_without_arguments_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
  Command::cargo_bin("relink-sysroot")?
    .assert()
    .code(1)
    .stdout(predicate::str::contains("Usage: relink-sysroot [OPTIONS] <DIRECTORY>"));

  Ok(())
}

#[cfg(unix)]
#[test]
fn test_relink_with_two_arguments_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  common::make_link(root, "a/b", "/lib/libc.so")?;

  Command::cargo_bin("relink-sysroot")?
    .arg(root)
    .arg(root)
    .assert()
    .code(1)
    .stdout(predicate::str::contains("Usage:"))
    .stdout(predicate::str::contains("replacing").not());

  assert_eq!(fs::read_link(root.join("a/b"))?, std::path::PathBuf::from("/lib/libc.so"));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_relink_prints_one_line_per_rewrite() -> Result<(), Box<dyn std::error::Error>> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  common::make_link(root, "a/b", "/lib/libc.so")?;
  common::make_link(root, "a/rel", "../lib/libx.so")?;

  let expected = format!("\t{} replacing /lib/libc.so => ../lib/libc.so\n", root.join("a/b").display());

  let output = Command::cargo_bin("relink-sysroot")?
    .arg(root)
    .arg("--colors=never")
    .output()?;

  assert!(output.status.success());
  let stdout = String::from_utf8(output.stdout)?;
  assert_eq!(stdout, expected);
  assert_eq!(fs::read_link(root.join("a/b"))?, std::path::PathBuf::from("../lib/libc.so"));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_relink_dry_run_prints_without_rewriting() -> Result<(), Box<dyn std::error::Error>> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  common::make_link(root, "a/b", "/lib/libc.so")?;

  Command::cargo_bin("relink-sysroot")?
    .arg("--dry-run")
    .arg(root)
    .assert()
    .success()
    .stdout(predicate::str::contains("replacing /lib/libc.so => ../lib/libc.so"));

  assert_eq!(fs::read_link(root.join("a/b"))?, std::path::PathBuf::from("/lib/libc.so"));
  Ok(())
}

#[test]
fn test_relink_missing_directory_fails() -> Result<(), Box<dyn std::error::Error>> {
  let temp_dir = tempdir()?;

  Command::cargo_bin("relink-sysroot")?
    .arg(temp_dir.path().join("missing"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("does not exist"));

  Ok(())
}

#[test]
fn test_stamp_rewrites_fixed_code_root() -> Result<(), Box<dyn std::error::Error>> {
  let temp_dir = tempdir()?;
  let cwd = temp_dir.path();
  write_file(cwd, "code/Core/Main.cpp", "int main() {}\n")?;
  write_file(cwd, "code/Core/notes.txt", "notes\n")?;
  write_file(cwd, "outside.cpp", "int outside;\n")?;

  Command::cargo_bin("stamp-copyright")?
    .arg("--colors=never")
    .current_dir(cwd)
    .assert()
    .success()
    .stdout(predicate::str::contains("Found directory: code"))
    .stdout(predicate::str::contains("Core"));

  assert_eq!(
    fs::read_to_string(cwd.join("code/Core/Main.cpp"))?,
    format!("{BANNER}int main() {{}}\n")
  );
  assert_eq!(fs::read_to_string(cwd.join("code/Core/notes.txt"))?, "notes\n");
  assert_eq!(fs::read_to_string(cwd.join("outside.cpp"))?, "int outside;\n");
  Ok(())
}

#[test]
fn test_stamp_quiet_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "code/a.h", "#pragma once\n")?;

  Command::cargo_bin("stamp-copyright")?
    .arg("--quiet")
    .current_dir(temp_dir.path())
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  Ok(())
}

#[test]
fn test_stamp_dry_run_with_diff_leaves_files() -> Result<(), Box<dyn std::error::Error>> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "code/a.h", "#pragma once\n")?;

  Command::cargo_bin("stamp-copyright")?
    .args(["--dry-run", "--show-diff", "--colors=never"])
    .current_dir(temp_dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Would stamp:"))
    .stderr(predicate::str::contains("+CONFIDENTIAL AND PROPRIETARY INFORMATION"));

  assert_eq!(fs::read_to_string(temp_dir.path().join("code/a.h"))?, "#pragma once\n");
  Ok(())
}

#[test]
fn test_stamp_without_code_directory_fails() -> Result<(), Box<dyn std::error::Error>> {
  let temp_dir = tempdir()?;

  Command::cargo_bin("stamp-copyright")?
    .current_dir(temp_dir.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("does not exist"));

  Ok(())
}

#[test]
fn test_stamp_rejects_positional_arguments() -> Result<(), Box<dyn std::error::Error>> {
  let temp_dir = tempdir()?;

  Command::cargo_bin("stamp-copyright")?
    .arg("src")
    .current_dir(temp_dir.path())
    .assert()
    .failure();

  Ok(())
}
