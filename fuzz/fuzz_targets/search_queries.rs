// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary byte sequences at the engine to verify it never panics and
//! never hands back a response that breaks the ranking or grouping rules.

#![no_main]

use folio::testing::make_doc_full;
use folio::{Category, QueryEngine, SearchIndex};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn engine() -> &'static QueryEngine {
    static ENGINE: OnceLock<QueryEngine> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let docs = vec![
            make_doc_full("react", "Blog Post About React", "Learn about React hooks", &["react", "hooks"], Category::Blog),
            make_doc_full("web", "Web Development Project", "A full stack web app", &["web"], Category::Projects),
            make_doc_full("json", "JSON Formatter", "Pretty-print JSON", &["json"], Category::Tools),
            make_doc_full("theme", "Toggle Theme", "Switch between light and dark", &["dark"], Category::Command),
            make_doc_full("café", "Café Consulting", "Naïve résumé review", &["über"], Category::Services),
        ];
        QueryEngine::new(SearchIndex::new(docs).expect("fixture ids are unique"))
    })
}

fuzz_target!(|query: &[u8]| {
    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();

    let engine = engine();
    let response = engine.query(&query);
    let limit = engine.config().limit;
    let threshold = engine.config().threshold;

    assert!(response.results.len() <= limit);

    if query.trim().is_empty() {
        assert!(response.is_empty());
        assert!(response.grouped.is_empty());
    }

    for result in &response.results {
        assert!(result.score.is_finite());
        assert!(result.score >= 0.0 && result.score < threshold);
    }

    for pair in response.results.windows(2) {
        assert!(pair[0].score <= pair[1].score, "results out of order");
    }

    let grouped: usize = response.grouped.values().map(Vec::len).sum();
    assert_eq!(grouped, response.results.len(), "groups must partition results");
    for (category, members) in &response.grouped {
        assert!(!members.is_empty());
        assert!(members.iter().all(|r| r.category == *category));
    }
});
