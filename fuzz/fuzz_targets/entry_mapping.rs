// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for content entry mapping.
//!
//! Feeds arbitrary JSON to every collection schema. Mapping must reject or
//! exclude bad entries, never panic, and never emit a document that would
//! break the index.

#![no_main]

use folio::build::{map_entry, CollectionKind, Mapped};
use libfuzzer_sys::fuzz_target;

const KINDS: [CollectionKind; 5] = [
    CollectionKind::Projects,
    CollectionKind::Blog,
    CollectionKind::Tools,
    CollectionKind::Services,
    CollectionKind::Commands,
];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, json)) = data.split_first() else {
        return;
    };
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(json) else {
        return;
    };
    let kind = KINDS[usize::from(selector) % KINDS.len()];

    let flag = |key: &str, set: bool| value.get(key) == Some(&serde_json::Value::Bool(set));
    // Commands have no draft state; only dated content honours `published`
    let excluded = match kind {
        CollectionKind::Commands => false,
        CollectionKind::Projects | CollectionKind::Blog => {
            flag("draft", true) || flag("published", false)
        }
        CollectionKind::Tools | CollectionKind::Services => flag("draft", true),
    };

    match map_entry(kind, value) {
        Ok(Mapped::Document(doc)) => {
            assert!(!excluded, "draft or unpublished entry was mapped");
            assert!(!doc.id.is_empty());
            assert!(!doc.title.trim().is_empty());
            assert_eq!(doc.category, kind.category());
            assert_eq!(doc.kind, kind.doc_kind());
        }
        Ok(Mapped::Excluded) | Err(_) => {}
    }
});
