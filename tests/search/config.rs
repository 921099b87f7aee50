//! Search settings from files and overrides.

use crate::common::portfolio_index;
use folio::{ConfigError, QueryEngine, SearchConfig};
use tempfile::TempDir;

#[test]
fn test_config_file_applies() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.json");
    std::fs::write(&path, r#"{ "limit": 1, "weights": { "tags": 0.9 } }"#).unwrap();

    let config = SearchConfig::from_file(&path).unwrap();
    let engine = QueryEngine::with_config(portfolio_index(), config).unwrap();
    assert_eq!(engine.query("rust").len(), 1);
}

#[test]
fn test_stricter_threshold_drops_weak_matches() {
    let loose = QueryEngine::new(portfolio_index()).query("rust");
    let strict = QueryEngine::with_config(
        portfolio_index(),
        SearchConfig {
            threshold: 0.1,
            ..SearchConfig::default()
        },
    )
    .unwrap()
    .query("rust");

    assert!(strict.len() < loose.len());
    assert!(strict.results.iter().all(|r| r.score < 0.1));
}

#[test]
fn test_invalid_weight_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.json");
    std::fs::write(&path, r#"{ "weights": { "title": 0.0 } }"#).unwrap();

    assert!(matches!(
        SearchConfig::from_file(&path),
        Err(ConfigError::Weight { field: "title", .. })
    ));
}
