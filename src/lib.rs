// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search for a personal portfolio site.
//!
//! Content collections (projects, posts, tools, services, command-palette
//! actions) are flattened into one list of documents at build time. In the
//! browser, a query is matched approximately against every document's title,
//! description and tags, scored, ranked, capped and grouped by category.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   build/     │────▶│   index/     │────▶│   search/    │
//! │ (manifest,   │     │ (SearchIndex,│     │ (QueryEngine,│
//! │  collections)│     │  JSON, JS)   │     │  grouping)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                           ┌──────────────────────┴───┐
//!                           ▼                          ▼
//!                    ┌─────────────┐           ┌──────────────┐
//!                    │   fuzzy/    │           │  scoring/    │
//!                    │ (substring  │           │ (raw, weight,│
//!                    │  distance)  │           │  ranking)    │
//!                    └─────────────┘           └──────────────┘
//! ```
//!
//! `geometry` is independent: the trigonometry behind the site's skills radar chart.
//!
//! # Usage
//!
//! ```
//! use folio::{QueryEngine, SearchIndex};
//!
//! let json = r#"[{"id": "blog:rust", "title": "Learning Rust", "category": "blog",
//!                 "url": "/blog/rust", "kind": "content"}]"#;
//! let index = SearchIndex::from_json(json).unwrap();
//! let engine = QueryEngine::new(index);
//!
//! let response = engine.query("rust");
//! assert_eq!(response.results[0].id, "blog:rust");
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod geometry;
pub mod index;
pub mod scoring;
pub mod search;
pub mod types;
pub mod util;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

pub use build::{
    build_from_dir, run_build, BuildOptions, BuildReport, CollectionDef, CollectionKind,
    InputManifest, GLOBAL_FILE, INDEX_FILE, MANIFEST_FILE,
};
pub use config::{FieldWeights, SearchConfig};
pub use error::{BuildError, CollectionError, ConfigError, EntryError, IndexError};
pub use index::{IndexSummary, SearchIndex};
pub use search::{query, QueryEngine};
pub use types::{Category, DocKind, Field, IndexableDocument, QueryResponse, QueryResult};

#[cfg(feature = "wasm")]
pub use wasm::FolioSearch;
