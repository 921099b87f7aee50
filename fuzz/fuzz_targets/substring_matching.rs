// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for approximate substring matching.
//!
//! Checks the matcher's reported edits against a plain Levenshtein distance on
//! the substring it claims to have found, and that the error budget holds.

#![no_main]

use arbitrary::Arbitrary;
use folio::fuzzy::{best_substring_match, for_each_match};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
    max_errors: u8,
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j - 1] + cost).min(prev[j] + 1).min(curr[j - 1] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let pattern: Vec<char> = input.pattern.chars().take(32).collect();
    let text: Vec<char> = input.text.chars().take(100).collect();
    let max_errors = usize::from(input.max_errors % 8);

    let best = best_substring_match(&pattern, &text, max_errors);

    let mut min_seen: Option<usize> = None;
    for_each_match(&pattern, &text, max_errors, |m| {
        assert!(m.errors <= max_errors);
        assert!(m.start <= m.end && m.end <= text.len());
        assert_eq!(
            levenshtein(&pattern, &text[m.start..m.end]),
            m.errors,
            "reported edits disagree with the matched substring"
        );
        min_seen = Some(min_seen.map_or(m.errors, |e| e.min(m.errors)));
    });

    assert_eq!(best.map(|m| m.errors), min_seen);

    // The whole text is always a candidate substring
    if levenshtein(&pattern, &text) <= max_errors {
        assert!(best.is_some());
    }
});
