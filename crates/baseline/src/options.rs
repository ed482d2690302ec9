// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison options, loadable from TOML.

use crate::error::{Error, Result};
use crate::locate::DEFAULT_CONTEXT_WIDTH;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling what a comparison ignores and how it reports
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CompareOptions {
    /// Strip `width="..."` from `<x:col .../>` elements (default: true)
    #[serde(default = "default_strip_column_widths")]
    pub strip_column_widths: bool,

    /// Characters of context shown on each side of a divergence (default: 40)
    #[serde(default = "default_context_width")]
    pub context_width: usize,

    /// Extra patterns whose matches are removed before comparing
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_strip_column_widths() -> bool {
    true
}

fn default_context_width() -> usize {
    DEFAULT_CONTEXT_WIDTH
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            strip_column_widths: default_strip_column_widths(),
            context_width: default_context_width(),
            ignore_patterns: Vec::new(),
        }
    }
}

impl CompareOptions {
    /// Parse and validate options from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: CompareOptions = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load and validate options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.context_width == 0 {
            return Err(Error::InvalidContextWidth(0));
        }

        for pattern in &self.ignore_patterns {
            regex::Regex::new(pattern).map_err(|e| Error::InvalidRegex {
                pattern: pattern.clone(),
                error: e.to_string(),
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
