// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! The engine never asks "are these two strings close?". It asks "where in this
//! field does the query fit best, and with how many edits?". That is the
//! approximate substring problem, which also covers prefixes for free: a
//! half-typed word is a zero-edit substring of the title it belongs to.

mod approx;

pub use approx::*;
