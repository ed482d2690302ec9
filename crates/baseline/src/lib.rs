// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Baseline comparison for generated spreadsheet packages.
//!
//! Generated workbook parts are compared against expected baselines as
//! text, after stripping values that vary between otherwise identical runs
//! (column widths and GUIDs). When the texts differ, the first divergence is
//! located and reported with surrounding context.
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut expected = Cursor::new(r#"<x:col min="1" width="8.43" customWidth="1"/>"#);
//! let mut actual = Cursor::new(r#"<x:col min="1" width="12.00" customWidth="1"/>"#);
//! let result = baseline::compare(&mut expected, &mut actual, true).unwrap();
//! assert!(result.is_equal());
//! ```

mod compare;
mod error;
pub mod locate;
pub mod normalize;
mod options;
pub mod stream;

pub use compare::{compare, streams_equal, Comparator, Comparison};
pub use error::{Error, Result};
pub use locate::{locate, Divergence};
pub use normalize::{normalize, Normalizer, ReplacementTable};
pub use options::CompareOptions;
