// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the site search box.
//!
//! The page hands over the document array it already loaded (from
//! `search-index.json` or the `window` global) and calls `search` on every
//! keystroke. A document array that fails to deserialize gives an engine
//! over an empty index, so the search box answers "no results" instead of
//! throwing. Bad options are the caller's bug and are rejected.

use crate::config::SearchConfig;
use crate::index::SearchIndex;
use crate::search::QueryEngine;
use crate::types::IndexableDocument;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct FolioSearch {
    engine: QueryEngine,
}

#[wasm_bindgen]
impl FolioSearch {
    /// Create a searcher over `docs` (an array of documents).
    ///
    /// `options` is an optional `SearchConfig` object, e.g.
    /// `{ threshold: 0.5, limit: 8 }`.
    #[wasm_bindgen(constructor)]
    pub fn new(docs: JsValue, options: Option<JsValue>) -> Result<FolioSearch, JsValue> {
        let config = match options {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                let config: SearchConfig = from_value(value).map_err(|e| e.to_string())?;
                config.validate().map_err(|e| e.to_string())?;
                config
            }
            _ => SearchConfig::default(),
        };

        let index = from_value::<Vec<IndexableDocument>>(docs)
            .map_err(|e| e.to_string())
            .and_then(|docs| SearchIndex::new(docs).map_err(|e| e.to_string()))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid search index, searching nothing");
                SearchIndex::empty()
            });

        let engine = QueryEngine::with_config(index, config).map_err(|e| e.to_string())?;
        Ok(FolioSearch { engine })
    }

    /// Run a query. Returns `{ results, grouped }`.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let response = self.engine.query(query);
        // Plain objects rather than JS Maps for `grouped`
        let serializer = Serializer::json_compatible();
        response
            .serialize(&serializer)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of indexed documents.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.engine.index().len()
    }
}
