// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! Every collection (projects, posts, tools, services, palette commands) is
//! mapped to one canonical `IndexableDocument` before it enters the index.
//! Nothing downstream of the builder knows which collection a document came from.
//!
//! # Invariants
//!
//! - **IndexableDocument**: `id` unique within an index, `title` non-empty.
//! - **Category / DocKind**: closed sets. Unknown strings fail to deserialize.
//! - **QueryResult**: `score < threshold`, lower is better.
//! - **QueryResponse**: `grouped` is a partition of `results`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which part of the site a document belongs to.
///
/// Declaration order is the group order in `QueryResponse::grouped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Projects,
    Blog,
    Tools,
    Command,
    Services,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Projects,
        Category::Blog,
        Category::Tools,
        Category::Command,
        Category::Services,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Projects => "projects",
            Category::Blog => "blog",
            Category::Tools => "tools",
            Category::Command => "command",
            Category::Services => "services",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static content vs. invokable palette action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Content,
    Command,
}

/// One searchable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexableDocument {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Category,
    pub url: String,
    pub kind: DocKind,
    /// Ordering and display only, never matched against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,
    /// Ordering only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl IndexableDocument {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// The searchable fields, best-weighted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Tags,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Tags => "tags",
        }
    }
}

/// A matched document with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub kind: DocKind,
    /// In `[0, 1]`, lower is better.
    pub score: f64,
    /// Field that produced `score`.
    pub matched_field: Field,
}

impl QueryResult {
    pub fn from_document(doc: &IndexableDocument, score: f64, matched_field: Field) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            description: doc.description.clone(),
            url: doc.url.clone(),
            category: doc.category,
            tags: doc.tags.clone(),
            kind: doc.kind,
            score,
            matched_field,
        }
    }
}

/// Flat and grouped views of the same capped result list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<QueryResult>,
    pub grouped: BTreeMap<Category, Vec<QueryResult>>,
}

impl QueryResponse {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}
