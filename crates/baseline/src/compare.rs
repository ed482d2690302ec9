// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalize-then-compare for byte streams.

use crate::error::Result;
use crate::locate::{self, Divergence};
use crate::normalize::Normalizer;
use crate::options::CompareOptions;
use crate::stream::{decode_text, ensure_at_start};
use std::io::{Read, Seek};
use tracing::trace;

/// Outcome of a comparison
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    equal: bool,
    divergence: Option<Divergence>,
}

impl Comparison {
    fn equal() -> Self {
        Self {
            equal: true,
            divergence: None,
        }
    }

    fn different(divergence: Option<Divergence>) -> Self {
        Self {
            equal: false,
            divergence,
        }
    }

    /// Whether the normalized texts are identical
    pub fn is_equal(&self) -> bool {
        self.equal
    }

    /// Where the normalized texts first differ.
    ///
    /// `None` when they are equal, and also when the first text is a strict
    /// prefix of the second (no position inside it differs).
    pub fn divergence(&self) -> Option<&Divergence> {
        self.divergence.as_ref()
    }

    pub fn into_divergence(self) -> Option<Divergence> {
        self.divergence
    }
}

/// Compare two streams, each positioned at its start.
///
/// GUIDs are always ignored; column widths only when `strip_column_widths`
/// is set. On a mismatch the divergence is logged at debug level and
/// attached to the result.
pub fn compare<A, B>(one: &mut A, other: &mut B, strip_column_widths: bool) -> Result<Comparison>
where
    A: Read + Seek,
    B: Read + Seek,
{
    let options = CompareOptions {
        strip_column_widths,
        ..CompareOptions::default()
    };
    Comparator::new(&options)?.compare(one, other)
}

/// Like [`compare`], returning only the verdict.
pub fn streams_equal<A, B>(one: &mut A, other: &mut B, strip_column_widths: bool) -> Result<bool>
where
    A: Read + Seek,
    B: Read + Seek,
{
    Ok(compare(one, other, strip_column_widths)?.is_equal())
}

/// Comparison engine configured from [`CompareOptions`]
#[derive(Clone, Debug)]
pub struct Comparator {
    normalizer: Normalizer,
    context_width: usize,
}

impl Comparator {
    pub fn new(options: &CompareOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            normalizer: Normalizer::from_options(options)?,
            context_width: options.context_width,
        })
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Decode both streams and compare their normalized text.
    ///
    /// Both streams must be at position 0; otherwise this fails with
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) naming the
    /// offending one (`one` or `other`).
    pub fn compare<A, B>(&self, one: &mut A, other: &mut B) -> Result<Comparison>
    where
        A: Read + Seek,
        B: Read + Seek,
    {
        ensure_at_start(one, "one")?;
        ensure_at_start(other, "other")?;

        let one = decode_text(one)?;
        let other = decode_text(other)?;
        self.compare_text(&one, &other)
    }

    /// Compare two already decoded texts.
    pub fn compare_text(&self, one: &str, other: &str) -> Result<Comparison> {
        let one = self.normalizer.normalize(one)?;
        let other = self.normalizer.normalize(other)?;

        if one == other {
            trace!(len = one.len(), "normalized texts are equal");
            return Ok(Comparison::equal());
        }

        Ok(Comparison::different(locate::report(
            &one,
            &other,
            self.context_width,
        )))
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
