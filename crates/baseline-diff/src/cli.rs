// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command line arguments.

use baseline::CompareOptions;
use clap::Parser;
use std::path::PathBuf;

/// Compare a generated file against its expected baseline
#[derive(Parser, Debug, Clone)]
#[command(name = "baseline-diff", version)]
#[command(about = "Compare generated files against expected baselines, ignoring column widths and GUIDs")]
pub struct Cli {
    /// Expected baseline file
    #[arg(value_name = "EXPECTED")]
    pub expected: PathBuf,

    /// Generated file to check
    #[arg(value_name = "ACTUAL")]
    pub actual: PathBuf,

    /// Treat column width differences as real differences
    #[arg(long)]
    pub keep_column_widths: bool,

    /// Characters of context shown around the first difference
    #[arg(long, value_name = "CHARS")]
    pub context: Option<usize>,

    /// TOML file with comparison options
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also print a unified diff of the normalized texts
    #[arg(long)]
    pub unified: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve comparison options: config file first, then flags on top.
    pub fn options(&self) -> baseline::Result<CompareOptions> {
        let mut options = match &self.config {
            Some(path) => CompareOptions::load(path)?,
            None => CompareOptions::default(),
        };

        if self.keep_column_widths {
            options.strip_column_widths = false;
        }
        if let Some(context) = self.context {
            options.context_width = context;
        }

        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
