// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! A field's raw score has two parts:
//!
//! ```text
//! raw = errors / pattern_len
//!     + match_start / location_distance
//!     + MID_WORD_PENALTY if the match does not start a word      (capped at 1)
//! ```
//!
//! The first term is the share of the query that had to be edited, the second
//! penalizes matches buried deep in a long description. The third keeps a
//! two-edit hit on the tail of an unrelated word ("react" against "pro*ject*")
//! from squeaking in under the threshold, while prefixes of words stay free. The weighted score
//! then shrinks the "goodness" `1 - raw` by the field weight:
//!
//! ```text
//! weighted = 1 - (1 - raw) * weight
//! ```
//!
//! With weight ≤ 1 the weighted score is never better than the raw one, which
//! is what lets the matcher prune with the threshold before weighting.

/// Candidates at or above this score are dropped.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Results per query.
pub const DEFAULT_LIMIT: usize = 10;

/// Chars at which the location penalty alone reaches 1.0.
pub const DEFAULT_LOCATION_DISTANCE: usize = 100;

/// Added when a match begins inside a word.
pub const MID_WORD_PENALTY: f64 = 0.2;

pub const TITLE_WEIGHT: f64 = 1.0;
pub const DESCRIPTION_WEIGHT: f64 = 0.8;
pub const TAGS_WEIGHT: f64 = 0.6;

/// Raw score for one field match, in `[0, 1]`.
pub fn raw_score(
    errors: usize,
    start: usize,
    at_word_start: bool,
    pattern_len: usize,
    location_distance: usize,
) -> f64 {
    if pattern_len == 0 {
        return 1.0;
    }
    let accuracy = errors as f64 / pattern_len as f64;
    let proximity = start as f64 / location_distance.max(1) as f64;
    let boundary = if at_word_start { 0.0 } else { MID_WORD_PENALTY };
    (accuracy + proximity + boundary).min(1.0)
}

/// Apply a field weight. Weight 1.0 is the identity.
pub fn weighted_score(raw: f64, weight: f64) -> f64 {
    (1.0 - (1.0 - raw) * weight).clamp(0.0, 1.0)
}

/// Largest edit count whose raw score could still land under `threshold`.
///
/// `errors / len < threshold` ⇔ `errors < threshold * len`, so this is
/// `ceil(threshold * len) - 1`.
pub fn max_errors(pattern_len: usize, threshold: f64) -> usize {
    ((threshold * pattern_len as f64).ceil() as usize).saturating_sub(1)
}
