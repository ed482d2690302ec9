// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparing the two files named on the command line.

use crate::cli::Cli;
use baseline::{stream, Comparator};
use similar::TextDiff;
use std::io::{Cursor, Write};
use std::path::Path;
use tracing::debug;

/// Process exit codes
pub mod exit_codes {
    /// Files match after normalization
    pub const SAME: i32 = 0;
    /// Files differ after normalization
    pub const DIFFERENT: i32 = 1;
    /// Bad arguments, options, or unreadable files
    pub const ERROR: i32 = 2;
}

/// Compare the files named by `cli`, writing any report to `out`.
///
/// Returns the exit code for the verdict.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> baseline::Result<i32> {
    let options = cli.options()?;
    let comparator = Comparator::new(&options)?;

    let (expected, actual) = tokio::try_join!(
        tokio::fs::read(&cli.expected),
        tokio::fs::read(&cli.actual)
    )?;
    debug!(
        expected = %cli.expected.display(),
        actual = %cli.actual.display(),
        strip_column_widths = options.strip_column_widths,
        "comparing"
    );

    let result = comparator.compare(
        &mut Cursor::new(expected.as_slice()),
        &mut Cursor::new(actual.as_slice()),
    )?;
    if result.is_equal() {
        return Ok(exit_codes::SAME);
    }

    writeln!(
        out,
        "{} and {} differ",
        cli.expected.display(),
        cli.actual.display()
    )?;
    match result.divergence() {
        Some(divergence) => writeln!(out, "{}", divergence)?,
        None => writeln!(
            out,
            "{} continues past the end of {}",
            cli.actual.display(),
            cli.expected.display()
        )?,
    }

    if cli.unified {
        let normalizer = comparator.normalizer();
        let expected = normalizer.normalize(&stream::decode(&expected))?;
        let actual = normalizer.normalize(&stream::decode(&actual))?;
        write_unified(out, &expected, &actual, &cli.expected, &cli.actual)?;
    }

    Ok(exit_codes::DIFFERENT)
}

/// Line-based unified diff of two normalized texts.
fn write_unified<W: Write>(
    out: &mut W,
    expected: &str,
    actual: &str,
    expected_path: &Path,
    actual_path: &Path,
) -> std::io::Result<()> {
    let expected_name = expected_path.display().to_string();
    let actual_name = actual_path.display().to_string();
    let diff = TextDiff::from_lines(expected, actual);
    write!(
        out,
        "{}",
        diff.unified_diff()
            .context_radius(3)
            .header(&expected_name, &actual_name)
    )
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
