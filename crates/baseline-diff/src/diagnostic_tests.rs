// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn error_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "baseline missing", false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Error: baseline missing\n");
}

#[test]
fn error_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "baseline missing", true);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "\x1b[31mError: baseline missing\x1b[0m\n");
}

#[test]
fn error_with_format_args() {
    let mut buf = Vec::new();
    write_error(&mut buf, format_args!("{} files unreadable", 2), false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Error: 2 files unreadable\n");
}

#[test]
fn verbose_selects_debug_filter() {
    assert_eq!(default_filter(true), "debug");
    assert_eq!(default_filter(false), "warn");
}
