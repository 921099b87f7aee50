//! The substring matcher against brute force over every substring.

use folio::fuzzy::{best_substring_match, for_each_match, starts_word};
use proptest::prelude::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Fewest edits between `pattern` and any substring of `text`, the empty one included.
fn oracle(pattern: &str, text: &str) -> usize {
    let text = chars(text);
    let mut best = pattern.chars().count();
    for start in 0..text.len() {
        for end in start + 1..=text.len() {
            let sub: String = text[start..end].iter().collect();
            best = best.min(strsim::levenshtein(pattern, &sub));
        }
    }
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_matches_oracle(
        pattern in "[abc]{0,6}",
        text in "[abcd ]{0,14}",
        max_errors in 0usize..5,
    ) {
        let expected = oracle(&pattern, &text);
        let found = best_substring_match(&chars(&pattern), &chars(&text), max_errors);
        if expected <= max_errors {
            let found = found.expect("oracle found a match within bound");
            prop_assert_eq!(found.errors, expected);
        } else {
            prop_assert!(found.is_none());
        }
    }

    #[test]
    fn prop_reported_span_has_reported_distance(
        pattern in "[abc]{1,6}",
        text in "[abcd ]{0,14}",
        max_errors in 0usize..5,
    ) {
        let p = chars(&pattern);
        let t = chars(&text);
        let mut spans = Vec::new();
        for_each_match(&p, &t, max_errors, |m| spans.push(m));

        for m in spans {
            prop_assert!(m.errors <= max_errors);
            prop_assert!(m.start <= m.end && m.end <= t.len());
            let sub: String = t[m.start..m.end].iter().collect();
            prop_assert_eq!(strsim::levenshtein(&pattern, &sub), m.errors);
        }
    }

    /// A mid-word start is only reported when no word start reaches the same
    /// end with as few edits.
    #[test]
    fn prop_equal_cost_prefers_word_start(
        pattern in "[abc]{1,6}",
        text in "[abc ]{0,14}",
        max_errors in 0usize..5,
    ) {
        let p = chars(&pattern);
        let t = chars(&text);
        let mut spans = Vec::new();
        for_each_match(&p, &t, max_errors, |m| spans.push(m));

        for m in spans {
            if starts_word(&t, m.start) {
                continue;
            }
            for s in 0..=m.end {
                if !starts_word(&t, s) {
                    continue;
                }
                let sub: String = t[s..m.end].iter().collect();
                prop_assert!(
                    strsim::levenshtein(&pattern, &sub) > m.errors,
                    "start {} is a word start with {} edits to end {}", s, m.errors, m.end
                );
            }
        }
    }

    #[test]
    fn prop_exact_substring_is_free(text in "[a-z ]{1,20}", a in 0usize..20, len in 1usize..6) {
        let t = chars(&text);
        let start = a.min(t.len() - 1);
        let end = (start + len).min(t.len());
        let pattern = &t[start..end];
        let found = best_substring_match(pattern, &t, 0);
        prop_assert_eq!(found.map(|m| m.errors), Some(0));
    }
}
