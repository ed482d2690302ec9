// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the first divergence between two normalized texts.

use std::fmt;
use tracing::debug;

/// Characters of context shown before and after a divergence
pub const DEFAULT_CONTEXT_WIDTH: usize = 40;

/// Marker placed between the before and after windows when rendering
const MARKER: &str = ">>>|<<<";

/// First differing position between two texts, with context on both sides.
///
/// Positions and windows count characters, not bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divergence {
    /// Character index of the first difference
    pub index: usize,
    /// Up to the context width of `left` ending at `index`
    pub left_before: String,
    /// Up to the context width of `left` starting at `index`
    pub left_after: String,
    /// Same window as `left_before`, applied to `right`
    pub right_before: String,
    /// Up to the context width of `right` from `index`, clipped at `right`'s length
    pub right_after: String,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "difference at index {}:", self.index)?;
        writeln!(f, "{}{}{}", self.left_before, MARKER, self.left_after)?;
        write!(f, "{}{}{}", self.right_before, MARKER, self.right_after)
    }
}

/// Locate the first divergence using the default context width.
pub fn locate(left: &str, right: &str) -> Option<Divergence> {
    locate_with_context(left, right, DEFAULT_CONTEXT_WIDTH)
}

/// Locate the first divergence, showing `width` characters on each side.
///
/// Only positions inside `left` are scanned. Returns `None` when `left` is
/// equal to, or a prefix of, `right`.
pub fn locate_with_context(left: &str, right: &str, width: usize) -> Option<Divergence> {
    let index = first_difference(left, right)?;
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();

    let right_start = index.min(right.len());

    Some(Divergence {
        index,
        left_before: window(&left, index.saturating_sub(width), index),
        left_after: window(&left, index, index.saturating_add(width)),
        right_before: window(&right, index.saturating_sub(width), index),
        right_after: window(&right, right_start, right_start.saturating_add(width)),
    })
}

/// Locate the first divergence and emit it on the debug channel.
pub fn report(left: &str, right: &str, width: usize) -> Option<Divergence> {
    let divergence = locate_with_context(left, right, width)?;
    debug!(index = divergence.index, "found difference:\n{}", divergence);
    Some(divergence)
}

/// Index of the first character of `left` that differs from `right`.
///
/// A position past the end of `right` counts as a difference.
fn first_difference(left: &str, right: &str) -> Option<usize> {
    let mut right = right.chars();
    left.chars()
        .enumerate()
        .find_map(|(i, l)| match right.next() {
            Some(r) if r == l => None,
            _ => Some(i),
        })
}

/// Characters `start..end` of `chars`, with both bounds clipped to its length.
fn window(chars: &[char], start: usize, end: usize) -> String {
    let end = end.min(chars.len());
    let start = start.min(end);
    chars
        .get(start..end)
        .map(|w| w.iter().collect())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;
