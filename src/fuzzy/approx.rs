// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching with an early-exit bound.
//!
//! Sellers' variant of the Levenshtein DP: the first row is all zeros, so a
//! match may start anywhere in the text for free. The last row then holds, for
//! each end position, the fewest edits needed to turn the pattern into some
//! substring ending there.
//!
//! Early exit: a substring can be at most `text.len()` long, so
//! `pattern.len() - text.len()` is a lower bound on the edits. Fields that are
//! too short for the pattern are rejected before anything is allocated.

/// Where the pattern matched and how many edits it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstringMatch {
    /// Edit distance between the pattern and `text[start..end]`.
    pub errors: usize,
    /// First char of the matched substring.
    pub start: usize,
    /// One past the last char of the matched substring.
    pub end: usize,
}

/// Best approximate occurrence of `pattern` in `text`, if it takes at most
/// `max_errors` edits.
///
/// Ties on edit count go to the earliest end position, which keeps the result
/// deterministic and favors matches near the start of the field.
pub fn best_substring_match(
    pattern: &[char],
    text: &[char],
    max_errors: usize,
) -> Option<SubstringMatch> {
    let mut best: Option<SubstringMatch> = None;
    for_each_match(pattern, text, max_errors, |m| {
        if best.map_or(true, |b| m.errors < b.errors) {
            best = Some(m);
        }
    });
    best
}

/// Report, for every end position, the cheapest substring ending there that
/// is within `max_errors` edits of `pattern`.
///
/// Callers that weigh edits against position (see `scoring`) need all of
/// these, not just the global minimum: a later match at a word start can
/// outscore an earlier one in the middle of a word. When several starts reach
/// the same end with the same edits, the reported one begins a word if any of
/// them does.
pub fn for_each_match(
    pattern: &[char],
    text: &[char],
    max_errors: usize,
    mut on_match: impl FnMut(SubstringMatch),
) {
    let m = pattern.len();
    let n = text.len();

    if m == 0 {
        on_match(SubstringMatch {
            errors: 0,
            start: 0,
            end: 0,
        });
        return;
    }

    // Early-exit: length shortfall is a lower bound on edit distance
    if m > n + max_errors {
        return;
    }

    let word_start: Vec<bool> = (0..=n).map(|s| starts_word(text, s)).collect();

    // dist[i]: edits for pattern[..i] against the best substring ending at column j
    // start[i]: where that substring begins
    let mut dist: Vec<usize> = (0..=m).collect();
    let mut start: Vec<usize> = vec![0; m + 1];

    // Empty substring at the very start: delete the whole pattern
    if m <= max_errors {
        on_match(SubstringMatch {
            errors: m,
            start: 0,
            end: 0,
        });
    }

    for (j, &tc) in text.iter().enumerate() {
        let mut diag_dist = dist[0];
        let mut diag_start = start[0];
        dist[0] = 0;
        start[0] = j + 1;

        for i in 1..=m {
            let left_dist = dist[i];
            let left_start = start[i];

            let cost = usize::from(pattern[i - 1] != tc);
            let mut cell = diag_dist + cost;
            let mut cell_start = diag_start;

            let moves = [(dist[i - 1] + 1, start[i - 1]), (left_dist + 1, left_start)];
            for (cand, cand_start) in moves {
                let tie_wins = cand == cell && prefer_start(&word_start, cand_start, cell_start);
                if cand < cell || tie_wins {
                    cell = cand;
                    cell_start = cand_start;
                }
            }

            dist[i] = cell;
            start[i] = cell_start;
            diag_dist = left_dist;
            diag_start = left_start;
        }

        if dist[m] <= max_errors {
            on_match(SubstringMatch {
                errors: dist[m],
                start: start[m],
                end: j + 1,
            });
        }
    }
}

/// Among equally cheap alignments, keep the start that scores best: a word
/// start over a mid-word one, then the earlier of the two.
fn prefer_start(word_start: &[bool], candidate: usize, current: usize) -> bool {
    match (word_start[candidate], word_start[current]) {
        (true, false) => true,
        (false, true) => false,
        _ => candidate < current,
    }
}

/// Does a match at `start` begin a word?
pub fn starts_word(text: &[char], start: usize) -> bool {
    start == 0 || text.get(start - 1).map_or(true, |c| !c.is_alphanumeric())
}
