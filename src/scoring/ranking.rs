// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how candidates get sorted.
//!
//! Score first, index position second. The index itself was sorted at build
//! time (featured, then newest, then title), so equal scores fall back to
//! that presentation order.

use crate::types::Field;
use std::cmp::Ordering;

/// A document that survived the threshold, before it is turned into a result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Position in the index.
    pub position: usize,
    pub score: f64,
    pub field: Field,
}

/// Compare two candidates for ranking.
///
/// Sort order:
/// 1. **Score** - ascending, lower distance wins
/// 2. **Position** - index order, which makes the sort total and deterministic
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort best first and keep at most `limit`.
pub fn rank(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.sort_unstable_by(compare_candidates);
    candidates.truncate(limit);
    candidates
}
