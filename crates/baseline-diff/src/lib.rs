// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command line front end for baseline comparison.
//!
//! Compares a generated file against its expected baseline with the
//! `baseline` engine and reports the first difference.

pub mod cli;
pub mod diagnostic;
pub mod run;
