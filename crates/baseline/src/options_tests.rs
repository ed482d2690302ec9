// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;
use std::io::Write;

#[test]
fn empty_document_uses_defaults() {
    let options = CompareOptions::from_toml_str("").unwrap();
    assert_eq!(options, CompareOptions::default());
    assert!(options.strip_column_widths);
    assert_eq!(options.context_width, 40);
    assert!(options.ignore_patterns.is_empty());
}

#[test]
fn parses_all_fields() {
    let options = CompareOptions::from_toml_str(
        r#"
        strip_column_widths = false
        context_width = 80
        ignore_patterns = ['<dcterms:modified>[^<]*</dcterms:modified>']
        "#,
    )
    .unwrap();
    assert!(!options.strip_column_widths);
    assert_eq!(options.context_width, 80);
    assert_eq!(options.ignore_patterns.len(), 1);
}

#[test]
fn unknown_field_is_rejected() {
    let err = CompareOptions::from_toml_str("strip_guids = false").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn zero_context_width_is_rejected() {
    let err = CompareOptions::from_toml_str("context_width = 0").unwrap_err();
    assert!(matches!(err, Error::InvalidContextWidth(0)));
}

#[test]
fn invalid_ignore_pattern_is_rejected() {
    let err = CompareOptions::from_toml_str(r#"ignore_patterns = ["[invalid"]"#).unwrap_err();
    assert!(matches!(err, Error::InvalidRegex { .. }));
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"context_width = 12\n").unwrap();
    file.flush().unwrap();

    let options = CompareOptions::load(file.path()).unwrap();
    assert_eq!(options.context_width, 12);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CompareOptions::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
