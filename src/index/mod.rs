// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! The built index: an immutable, shareable list of documents.
//!
//! Order matters. Position in the list is the final ranking tiebreaker, so
//! whatever order the builder produced is preserved exactly. The list lives
//! behind an `Arc<[_]>`, which makes clones cheap and mutation impossible.

use crate::error::IndexError;
use crate::types::{Category, DocKind, IndexableDocument};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Counts shown by `folio inspect`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSummary {
    pub documents: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub content: usize,
    pub commands: usize,
    pub featured: usize,
    pub dated: usize,
    pub tags: usize,
}

#[derive(Debug, Clone)]
pub struct SearchIndex {
    docs: Arc<[IndexableDocument]>,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl SearchIndex {
    /// Wrap an ordered document list, checking id uniqueness and titles.
    pub fn new(docs: Vec<IndexableDocument>) -> Result<Self, IndexError> {
        let mut seen = HashSet::with_capacity(docs.len());
        for doc in &docs {
            if doc.title.trim().is_empty() {
                return Err(IndexError::EmptyTitle(doc.id.clone()));
            }
            if !seen.insert(doc.id.as_str()) {
                return Err(IndexError::DuplicateId(doc.id.clone()));
            }
        }
        Ok(Self { docs: docs.into() })
    }

    pub fn empty() -> Self {
        Self {
            docs: Arc::from(Vec::new()),
        }
    }

    /// Parse a persisted index (a JSON array of documents).
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let docs: Vec<IndexableDocument> = serde_json::from_str(json)?;
        Self::new(docs)
    }

    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let content = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load, or fall back to an empty index if the artifact is missing or broken.
    ///
    /// Search then answers "no results" instead of failing the page.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "search index unavailable, using empty index");
                Self::empty()
            }
        }
    }

    pub fn docs(&self) -> &[IndexableDocument] {
        &self.docs
    }

    pub fn get(&self, position: usize) -> Option<&IndexableDocument> {
        self.docs.get(position)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&*self.docs)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&*self.docs)
    }

    pub fn summary(&self) -> IndexSummary {
        let mut summary = IndexSummary {
            documents: self.docs.len(),
            ..IndexSummary::default()
        };
        for doc in self.docs.iter() {
            *summary.by_category.entry(doc.category).or_default() += 1;
            match doc.kind {
                DocKind::Content => summary.content += 1,
                DocKind::Command => summary.commands += 1,
            }
            summary.featured += usize::from(doc.is_featured());
            summary.dated += usize::from(doc.publish_date.is_some());
            summary.tags += doc.tags.len();
        }
        summary
    }

    /// A script that assigns the document array to `window.<name>`.
    pub fn to_js_global(&self, name: &str) -> Result<String, serde_json::Error> {
        Ok(format!("window.{} = {};\n", name, self.to_json()?))
    }
}
