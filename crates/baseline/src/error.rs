// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error type shared by the normalizer, comparator and stream helpers.

use thiserror::Error;

/// Errors that can occur while normalizing or comparing artifacts
#[derive(Debug, Error)]
pub enum Error {
    /// A caller broke the contract of an operation (e.g. a stream not at its start).
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument { param: &'static str, reason: String },

    /// The same matched text was mapped to two different rewrites.
    #[error("conflicting replacement for matched text '{original}'")]
    ConflictingReplacement { original: String },

    #[error("invalid regex pattern '{pattern}': {error}")]
    InvalidRegex { pattern: String, error: String },

    #[error("context width must be positive, got {0}")]
    InvalidContextWidth(usize),

    #[error("invalid options file: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::InvalidArgument`] for the named parameter.
    pub fn invalid_argument(param: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
