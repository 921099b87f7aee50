//! Ordering, weighting and the cap.

use crate::common::{make_doc, make_doc_full, portfolio_index, synthetic_index};
use folio::{Category, Field, QueryEngine, SearchIndex};

#[test]
fn test_portfolio_rust_ranking() {
    let response = QueryEngine::new(portfolio_index()).query("rust");
    let ranked: Vec<(&str, Field)> = response
        .results
        .iter()
        .map(|r| (r.id.as_str(), r.matched_field))
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("consulting", Field::Title),
            ("rust-errors", Field::Title),
            ("parser", Field::Tags),
        ]
    );
}

#[test]
fn test_scores_non_decreasing() {
    let response = QueryEngine::new(portfolio_index()).query("json");
    for pair in response.results.windows(2) {
        assert!(pair[0].score <= pair[1].score);
    }
}

#[test]
fn test_cap_keeps_best() {
    // Ten weak matches first in index order, then five exact ones
    let mut docs: Vec<_> = (0..10)
        .map(|i| {
            make_doc_full(
                &format!("weak-{}", i),
                &format!("Item {}", i),
                "something about widgets",
                &[],
                Category::Blog,
            )
        })
        .collect();
    docs.extend((0..5).map(|i| make_doc(&format!("exact-{}", i), &format!("Widgets {}", i))));

    let response = QueryEngine::new(SearchIndex::new(docs).unwrap()).query("widgets");
    assert_eq!(response.len(), 10);
    let exact: Vec<&str> = response.results[..5].iter().map(|r| r.id.as_str()).collect();
    assert_eq!(exact, vec!["exact-0", "exact-1", "exact-2", "exact-3", "exact-4"]);
    assert!(response.results[5..].iter().all(|r| r.id.starts_with("weak-")));
}

#[test]
fn test_equal_scores_keep_index_order() {
    let response = QueryEngine::new(synthetic_index(50)).query("test");
    let ids: Vec<String> = response.results.into_iter().map(|r| r.id).collect();
    let expected: Vec<String> = (0..10).map(|i| format!("doc-{}", i)).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_typo_still_ranks_first() {
    let response = QueryEngine::new(portfolio_index()).query("consultng");
    assert_eq!(response.results[0].id, "consulting");
}

#[test]
fn test_prefix_of_command() {
    let response = QueryEngine::new(portfolio_index()).query("tog");
    assert_eq!(response.results[0].id, "toggle-theme");
    assert_eq!(response.results[0].score, 0.0);
    assert_eq!(response.results[0].category, Category::Command);
}

#[test]
fn test_every_score_under_threshold() {
    let engine = QueryEngine::new(portfolio_index());
    for q in ["rust", "json", "dark", "parser", "x", "review code"] {
        for result in engine.query(q).results {
            assert!(result.score < 0.6, "{} scored {} for {:?}", result.id, result.score, q);
        }
    }
}
