// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Query preparation.

use crate::util::normalize::normalize;

/// Normalize a query into the char pattern the matcher consumes.
///
/// Empty for empty and whitespace-only input.
///
/// # Example
///
/// ```ignore
/// assert_eq!(parse_query("  React  HOOKS "), "react hooks".chars().collect::<Vec<_>>());
/// ```
pub fn parse_query(query: &str) -> Vec<char> {
    normalize(query).chars().collect()
}
