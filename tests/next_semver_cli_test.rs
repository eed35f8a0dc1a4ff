//! Integration tests for next-semver

#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::next_semver_cmd;

#[test]
fn test_major_bump() {
    next_semver_cmd()
        .arg("major")
        .write_stdin("v2.3.4\n")
        .assert()
        .success()
        .stdout("3.0.0\n");
}

#[test]
fn test_minor_bump() {
    next_semver_cmd()
        .arg("minor")
        .write_stdin("v2.3.4\n")
        .assert()
        .success()
        .stdout("2.4.0\n");
}

#[test]
fn test_patch_bump_for_unknown_argument() {
    next_semver_cmd()
        .arg("hotfix")
        .write_stdin("1.9.9\n")
        .assert()
        .success()
        .stdout("1.9.10\n");
}

#[test]
fn test_patch_bump_for_hyphen_argument() {
    next_semver_cmd()
        .arg("--hotfix")
        .write_stdin("1.9.9\n")
        .assert()
        .success()
        .stdout("1.9.10\n");

    next_semver_cmd()
        .arg("-1")
        .write_stdin("1.9.9\n")
        .assert()
        .success()
        .stdout("1.9.10\n");
}

#[test]
fn test_arguments_after_bump_are_ignored() {
    next_semver_cmd()
        .args(["patch", "extra"])
        .write_stdin("1.9.9\n")
        .assert()
        .success()
        .stdout("1.9.10\n");

    next_semver_cmd()
        .args(["major", "extra", "--verbose"])
        .write_stdin("v2.3.4\n")
        .assert()
        .success()
        .stdout("3.0.0\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_patch_bump_without_argument() {
    next_semver_cmd()
        .write_stdin("1.9.9\n")
        .assert()
        .success()
        .stdout("1.9.10\n");
}

#[test]
fn test_git_log_like_input() {
    let input = "\
a1b2c3d (tag: v0.3.1) fix: handle empty stream
e4f5a6b chore: bump deps
0011223 (tag: v0.3.0) feat: add snapshot support
";
    next_semver_cmd()
        .arg("minor")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("0.4.0\n0.4.0\n");
}

#[test]
fn test_non_matching_lines_produce_nothing() {
    next_semver_cmd()
        .arg("major")
        .write_stdin("no versions\nv1.2\n\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_empty_stdin() {
    next_semver_cmd()
        .arg("patch")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_malformed_version_fails() {
    next_semver_cmd()
        .arg("patch")
        .write_stdin("v1.0.0\n1.02.3\n")
        .assert()
        .code(1)
        .stdout("1.0.1\n")
        .stderr(predicate::str::starts_with("ERROR: "))
        .stderr(predicate::str::contains("\x1b[").not())
        .stderr(predicate::str::contains("Invalid version '1.02.3'"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    next_semver_cmd()
        .args(["--verbose", "major"])
        .write_stdin("v2.3.4\n")
        .assert()
        .success()
        .stdout("3.0.0\n")
        .stderr(predicate::str::contains("bumped version"));
}
