//! The reference scenarios, end to end through the public API.

use crate::common::{react_index, synthetic_index, write_json, write_manifest};
use folio::{build_from_dir, query, Category, QueryEngine, SearchIndex};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_react_query_finds_post_not_project() {
    let response = query(&react_index(), "React");

    assert!(!response.is_empty());
    let first = &response.results[0];
    assert_eq!(first.id, "react-post");
    assert_eq!(first.category, Category::Blog);
    assert!(first.score < 0.2, "good match should score low: {}", first.score);
    assert!(response.results.iter().all(|r| r.id != "web-project"));
}

#[test]
fn test_fifty_matches_capped_at_ten() {
    let response = query(&synthetic_index(50), "Test");
    assert_eq!(response.len(), 10);
    assert_eq!(response.grouped[&Category::Blog].len(), 10);
}

#[test]
fn test_empty_index() {
    let response = query(&SearchIndex::empty(), "anything");
    assert!(response.results.is_empty());
    assert!(response.grouped.is_empty());
}

#[test]
fn test_draft_never_found() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        json!([{ "name": "blog", "kind": "blog", "path": "blog.json" }]),
    );
    write_json(
        &dir.path().join("blog.json"),
        &json!([
            { "slug": "secret-draft", "title": "Secret Draft", "draft": true },
            { "slug": "public-post", "title": "Public Post" }
        ]),
    );

    let (index, _) = build_from_dir(dir.path()).unwrap();
    let engine = QueryEngine::new(index);

    assert!(engine
        .query("Draft")
        .results
        .iter()
        .all(|r| r.title != "Secret Draft"));
    let post = engine.query("Post");
    assert_eq!(post.len(), 1);
    assert_eq!(post.results[0].title, "Public Post");
}

#[test]
fn test_empty_query_on_non_empty_index() {
    let engine = QueryEngine::new(react_index());
    for q in ["", " ", "\t\n"] {
        let response = engine.query(q);
        assert!(response.results.is_empty());
        assert!(response.grouped.is_empty());
    }
}
