// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text normalization for baseline comparison.
//!
//! Generated spreadsheet parts carry values that legitimately change from
//! run to run: column widths measured from the rendering font, and GUIDs
//! minted per save. The rules here strip those parts so two serializations
//! of the same workbook produce the same text.
//!
//! Every rule only removes text. A normalization round is repeated until it
//! stops changing its input, which keeps [`normalize`] idempotent even when a
//! removal splices two fragments into a new match.

use crate::error::{Error, Result};
use crate::options::CompareOptions;
use regex::Regex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::trace;

/// Column definition element carrying a numeric width
static COLUMN_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"<x:col.*?width="\d+(\.\d+)?".*?/>"#).ok());

/// Width attribute plus the whitespace that separates it from the next attribute
static WIDTH_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"width="\d+(\.\d+)?"\s*"#).ok());

/// Braced GUID literal, e.g. `{3F2504E0-4F89-11D3-9A0C-0305E82C3301}`
static GUID_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?m)\{[0-9A-Fa-f]{8}-([0-9A-Fa-f]{4}-){3}[0-9A-Fa-f]{12}\}").ok()
});

/// Normalize `text` with the built-in rules selected by the flags.
///
/// Column widths are stripped first, then GUIDs.
pub fn normalize(text: &str, strip_column_widths: bool, strip_guids: bool) -> Result<String> {
    Normalizer::new(strip_column_widths, strip_guids).normalize(text)
}

/// Remove the `width="..."` attribute from every `<x:col .../>` element.
pub fn strip_column_widths(text: &str) -> Result<String> {
    let table = column_replacements(text)?;
    Ok(table.apply(text))
}

/// Remove every braced GUID literal.
pub fn strip_guids(text: &str) -> String {
    match GUID_REGEX.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

/// First pass of column-width stripping: map each distinct column element
/// found in `text` to its width-free rewrite.
pub fn column_replacements(text: &str) -> Result<ReplacementTable> {
    let mut table = ReplacementTable::new();
    let (Some(column), Some(width)) = (COLUMN_REGEX.as_ref(), WIDTH_REGEX.as_ref()) else {
        return Ok(table);
    };

    for m in column.find_iter(text) {
        let original = m.as_str();
        if table.get(original).is_some() {
            continue;
        }
        let rewritten = width.replace_all(original, "").into_owned();
        table.insert(original.to_string(), rewritten)?;
    }

    Ok(table)
}

/// Mapping from matched text to its rewrite, built once per input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: HashMap<String, String>,
}

impl ReplacementTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `original` is rewritten to `replacement`.
    ///
    /// Re-inserting an identical pair is a no-op. Mapping an existing key to
    /// a different rewrite fails with [`Error::ConflictingReplacement`]; the
    /// first mapping is kept.
    pub fn insert(&mut self, original: String, replacement: String) -> Result<()> {
        match self.entries.entry(original) {
            Entry::Occupied(entry) => {
                if *entry.get() == replacement {
                    Ok(())
                } else {
                    Err(Error::ConflictingReplacement {
                        original: entry.key().clone(),
                    })
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(replacement);
                Ok(())
            }
        }
    }

    /// Look up the rewrite for a matched text
    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Second pass: replace every occurrence of each original with its rewrite.
    ///
    /// Substitution is a single left-to-right scan, so a rewrite is never
    /// itself rewritten. Where two originals start at the same position the
    /// longer one wins.
    pub fn apply(&self, text: &str) -> String {
        if self.entries.is_empty() {
            return text.to_string();
        }

        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");

        match Regex::new(&alternation) {
            Ok(re) => re
                .replace_all(text, |caps: &regex::Captures<'_>| {
                    let matched = caps.get(0).map_or("", |m| m.as_str());
                    self.get(matched).unwrap_or(matched).to_string()
                })
                .into_owned(),
            // Too many originals for one automaton; fall back to one pass per key.
            Err(_) => keys.iter().fold(text.to_string(), |acc, &key| {
                let replacement = self.get(key).unwrap_or(key);
                acc.replace(key, replacement)
            }),
        }
    }
}

/// Configured set of normalization rules.
///
/// Holds only compiled, immutable patterns, so one instance can be shared
/// across threads.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    strip_column_widths: bool,
    strip_guids: bool,
    ignore: Vec<Regex>,
}

impl Normalizer {
    pub fn new(strip_column_widths: bool, strip_guids: bool) -> Self {
        Self {
            strip_column_widths,
            strip_guids,
            ignore: Vec::new(),
        }
    }

    /// Build the normalizer a comparison with `options` uses. GUIDs are always stripped.
    pub fn from_options(options: &CompareOptions) -> Result<Self> {
        options
            .ignore_patterns
            .iter()
            .try_fold(Self::new(options.strip_column_widths, true), |n, p| {
                n.with_ignore_pattern(p)
            })
    }

    /// Add a pattern whose matches are removed after the built-in rules.
    pub fn with_ignore_pattern(mut self, pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| Error::InvalidRegex {
            pattern: pattern.to_string(),
            error: e.to_string(),
        })?;
        self.ignore.push(re);
        Ok(self)
    }

    pub fn strips_column_widths(&self) -> bool {
        self.strip_column_widths
    }

    pub fn strips_guids(&self) -> bool {
        self.strip_guids
    }

    /// Apply all enabled rules until the text no longer changes.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let mut current = text.to_string();
        let mut rounds = 0usize;
        loop {
            rounds += 1;
            let next = self.round(&current)?;
            if next == current {
                break;
            }
            current = next;
        }
        trace!(rounds, len = current.len(), "normalized text");
        Ok(current)
    }

    /// One pass of every enabled rule, in order.
    fn round(&self, text: &str) -> Result<String> {
        let mut result = if self.strip_column_widths {
            strip_column_widths(text)?
        } else {
            text.to_string()
        };

        if self.strip_guids {
            result = strip_guids(&result);
        }

        for re in &self.ignore {
            result = re.replace_all(&result, "").into_owned();
        }

        Ok(result)
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
