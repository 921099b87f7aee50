//! Case, whitespace and diacritics do not change results.

use crate::common::{make_doc, portfolio_index, react_index};
use folio::{QueryEngine, SearchIndex};

#[test]
fn test_case_insensitive() {
    let engine = QueryEngine::new(react_index());
    assert_eq!(engine.query("REACT"), engine.query("react"));
    assert_eq!(engine.query("ReAcT"), engine.query("react"));
}

#[test]
fn test_whitespace_collapsed() {
    let engine = QueryEngine::new(portfolio_index());
    let spaced = engine.query("  rust    consulting ");
    assert_eq!(spaced, engine.query("rust consulting"));
    assert_eq!(spaced.results[0].id, "consulting");
    assert_eq!(spaced.results[0].score, 0.0);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_ignored() {
    let engine = QueryEngine::new(
        SearchIndex::new(vec![
            make_doc("cafe", "Café Recommendations"),
            make_doc("resume", "Résumé Builder"),
        ])
        .unwrap(),
    );
    assert_eq!(engine.query("cafe").results[0].id, "cafe");
    assert_eq!(engine.query("resume").results[0].id, "resume");
    assert_eq!(engine.query("RÉSUMÉ").results[0].id, "resume");
}
