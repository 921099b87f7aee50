//! Invariants of `QueryEngine::query` over random indexes.

use crate::common::make_doc_full;
use folio::{Category, IndexableDocument, QueryEngine, SearchIndex};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "react", "rust", "hooks", "parser", "test", "web", "design", "theme", "json", "async",
        "tokio", "search", "index", "café", "résumé",
    ])
    .prop_map(str::to_string)
}

fn text_strategy(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..max_words).prop_map(|w| w.join(" "))
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn doc_strategy() -> impl Strategy<Value = (String, String, Vec<String>, Category)> {
    (
        prop::collection::vec(word_strategy(), 1..4).prop_map(|w| w.join(" ")),
        text_strategy(8),
        prop::collection::vec(word_strategy(), 0..3),
        category_strategy(),
    )
}

fn index_strategy() -> impl Strategy<Value = SearchIndex> {
    prop::collection::vec(doc_strategy(), 0..30).prop_map(|docs| {
        let docs: Vec<IndexableDocument> = docs
            .into_iter()
            .enumerate()
            .map(|(i, (title, description, tags, category))| {
                let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                make_doc_full(&format!("doc-{}", i), &title, &description, &tags, category)
            })
            .collect();
        SearchIndex::new(docs).unwrap()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        prop::string::string_regex("[a-zA-Z ]{0,12}").unwrap(),
    ]
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_blank_query_is_empty(index in index_strategy(), spaces in 0usize..5) {
        let response = QueryEngine::new(index).query(&" ".repeat(spaces));
        prop_assert!(response.results.is_empty());
        prop_assert!(response.grouped.is_empty());
    }

    #[test]
    fn prop_empty_index_is_empty(query in query_strategy()) {
        let response = QueryEngine::new(SearchIndex::empty()).query(&query);
        prop_assert!(response.results.is_empty());
        prop_assert!(response.grouped.is_empty());
    }

    #[test]
    fn prop_results_capped_and_under_threshold(index in index_strategy(), query in query_strategy()) {
        let response = QueryEngine::new(index).query(&query);
        prop_assert!(response.len() <= 10);
        for result in &response.results {
            prop_assert!(result.score < 0.6);
            prop_assert!(result.score >= 0.0);
        }
    }

    #[test]
    fn prop_scores_non_decreasing(index in index_strategy(), query in query_strategy()) {
        let response = QueryEngine::new(index).query(&query);
        for pair in response.results.windows(2) {
            prop_assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn prop_cap_keeps_the_best(index in index_strategy(), query in word_strategy()) {
        let engine = QueryEngine::new(index.clone());
        let capped = engine.query(&query);
        let uncapped = QueryEngine::with_config(
            index,
            folio::SearchConfig { limit: usize::MAX, ..Default::default() },
        )
        .unwrap()
        .query(&query);

        prop_assert_eq!(capped.len(), uncapped.len().min(10));
        prop_assert_eq!(&capped.results[..], &uncapped.results[..capped.len()]);
    }

    #[test]
    fn prop_grouping_partitions_results(index in index_strategy(), query in query_strategy()) {
        let response = QueryEngine::new(index).query(&query);
        let total: usize = response.grouped.values().map(Vec::len).sum();
        prop_assert_eq!(total, response.len());

        for (category, group) in &response.grouped {
            let flat: Vec<_> = response
                .results
                .iter()
                .filter(|r| r.category == *category)
                .collect();
            let grouped: Vec<_> = group.iter().collect();
            prop_assert_eq!(flat, grouped);
        }
    }

    #[test]
    fn prop_case_insensitive(index in index_strategy(), query in query_strategy()) {
        let engine = QueryEngine::new(index);
        prop_assert_eq!(
            engine.query(&query.to_uppercase()),
            engine.query(&query.to_lowercase())
        );
    }
}
