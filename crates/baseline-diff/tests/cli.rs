// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

//! End-to-end tests for the baseline-diff binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SHEET_NARROW: &str = concat!(
    r#"<?xml version="1.0" encoding="utf-8"?>"#,
    "\n",
    r#"<x:worksheet xmlns:x="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    r#"<x:cols><x:col min="1" max="1" width="8.43" customWidth="1"/></x:cols>"#,
    r#"<x:tableParts><x:tablePart xr:uid="{3F2504E0-4F89-11D3-9A0C-0305E82C3301}"/></x:tableParts>"#,
    "</x:worksheet>"
);

const SHEET_WIDE: &str = concat!(
    r#"<?xml version="1.0" encoding="utf-8"?>"#,
    "\n",
    r#"<x:worksheet xmlns:x="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    r#"<x:cols><x:col min="1" max="1" width="12.00" customWidth="1"/></x:cols>"#,
    r#"<x:tableParts><x:tablePart xr:uid="{B5E1A2C3-0000-4D4E-8F9A-123456789ABC}"/></x:tableParts>"#,
    "</x:worksheet>"
);

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn baseline_diff() -> Command {
    Command::cargo_bin("baseline-diff").expect("binary should build")
}

#[test]
fn widths_and_guids_are_ignored_by_default() {
    let dir = TempDir::new().unwrap();
    let expected = write(dir.path(), "expected.xml", SHEET_NARROW);
    let actual = write(dir.path(), "actual.xml", SHEET_WIDE);

    baseline_diff()
        .arg(&expected)
        .arg(&actual)
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn keep_column_widths_reports_the_width() {
    let dir = TempDir::new().unwrap();
    let expected = write(dir.path(), "expected.xml", SHEET_NARROW);
    let actual = write(dir.path(), "actual.xml", SHEET_WIDE);

    baseline_diff()
        .arg(&expected)
        .arg(&actual)
        .arg("--keep-column-widths")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("difference at index"))
        .stdout(predicate::str::contains(">>>|<<<8.43"))
        .stdout(predicate::str::contains(">>>|<<<12.00"));
}

#[test]
fn config_file_supplies_ignore_patterns() {
    let dir = TempDir::new().unwrap();
    let expected = write(
        dir.path(),
        "expected.xml",
        "<dcterms:modified>2026-01-01T00:00:00Z</dcterms:modified><x:sheetData/>",
    );
    let actual = write(
        dir.path(),
        "actual.xml",
        "<dcterms:modified>2026-10-18T12:34:56Z</dcterms:modified><x:sheetData/>",
    );
    let config = write(
        dir.path(),
        "baseline.toml",
        "ignore_patterns = ['<dcterms:modified>[^<]*</dcterms:modified>']\n",
    );

    baseline_diff()
        .arg(&expected)
        .arg(&actual)
        .assert()
        .code(1);

    baseline_diff()
        .arg(&expected)
        .arg(&actual)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(0);
}

#[test]
fn missing_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let expected = write(dir.path(), "expected.xml", SHEET_NARROW);

    baseline_diff()
        .arg(&expected)
        .arg(dir.path().join("missing.xml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let expected = write(dir.path(), "expected.xml", SHEET_NARROW);
    let config = write(dir.path(), "bad.toml", "ignore_patterns = ['(unclosed']\n");

    baseline_diff()
        .arg(&expected)
        .arg(&expected)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid regex pattern"));
}

#[test]
fn verbose_logs_the_difference_to_stderr() {
    let dir = TempDir::new().unwrap();
    let expected = write(dir.path(), "expected.xml", "<x:v>1</x:v>");
    let actual = write(dir.path(), "actual.xml", "<x:v>2</x:v>");

    baseline_diff()
        .arg(&expected)
        .arg(&actual)
        .arg("--verbose")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("found difference"));
}
