//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Category, DocKind, Field, IndexableDocument, QueryResult};

/// Create a simple blog document with default fields.
pub fn make_doc(id: &str, title: &str) -> IndexableDocument {
    IndexableDocument {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        tags: vec![],
        category: Category::Blog,
        url: format!("/blog/{}", id),
        kind: DocKind::Content,
        publish_date: None,
        featured: None,
    }
}

/// Create a document with every searchable field set.
pub fn make_doc_full(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    category: Category,
) -> IndexableDocument {
    IndexableDocument {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category,
        url: format!("/{}/{}", category, id),
        kind: if category == Category::Command {
            DocKind::Command
        } else {
            DocKind::Content
        },
        publish_date: None,
        featured: None,
    }
}

/// Create a query result without going through the engine.
pub fn make_result(id: &str, category: Category, score: f64) -> QueryResult {
    QueryResult::from_document(
        &make_doc_full(id, id, "", &[], category),
        score,
        Field::Title,
    )
}
