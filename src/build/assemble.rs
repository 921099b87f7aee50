// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Turn loaded collections into one sorted, validated index.
//!
//! Bad input is isolated: an unreadable collection or a malformed entry is
//! logged, counted and skipped. The build only fails when there was nothing
//! to read at all, so a broken search box never ships silently.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

use super::document::{map_entry, Mapped};
use super::parallel::LoadedCollection;
use crate::error::BuildError;
use crate::index::SearchIndex;
use crate::types::IndexableDocument;

/// What a build did, for the CLI summary and for tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    pub collections_read: usize,
    pub collections_failed: Vec<String>,
    pub indexed: usize,
    pub excluded: usize,
    pub skipped: usize,
    pub duplicates: usize,
}

/// Map, filter, dedupe and sort.
///
/// Fails with `NoCollections` for an empty manifest and with
/// `AllSourcesUnreadable` when every collection failed to load. A collection
/// whose entries are all malformed counts as failed; an empty one does not.
pub fn assemble_index(
    collections: Vec<LoadedCollection>,
) -> Result<(SearchIndex, BuildReport), BuildError> {
    if collections.is_empty() {
        return Err(BuildError::NoCollections);
    }

    let total = collections.len();
    let mut report = BuildReport::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut docs: Vec<IndexableDocument> = Vec::new();

    for collection in collections {
        let name = collection.def.name;
        let kind = collection.def.kind;
        let entries = match collection.entries {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(collection = %name, error = %e, "skipping unreadable collection");
                report.collections_failed.push(name);
                continue;
            }
        };
        tracing::debug!(collection = %name, entries = entries.len(), "mapping collection");

        let total_entries = entries.len();
        let mut malformed = 0;
        for entry in entries {
            let mapped = entry.value.and_then(|value| map_entry(kind, value));
            match mapped {
                Ok(Mapped::Document(doc)) => {
                    if seen.contains(&doc.id) {
                        tracing::warn!(source = %entry.source, id = %doc.id, "skipping duplicate id");
                        report.duplicates += 1;
                        continue;
                    }
                    seen.insert(doc.id.clone());
                    docs.push(doc);
                }
                Ok(Mapped::Excluded) => {
                    tracing::debug!(source = %entry.source, "excluding draft");
                    report.excluded += 1;
                }
                Err(e) => {
                    tracing::warn!(source = %entry.source, error = %e, "skipping malformed entry");
                    malformed += 1;
                }
            }
        }

        report.skipped += malformed;
        // Entries exist but none of them could be used
        if total_entries > 0 && malformed == total_entries {
            tracing::warn!(
                collection = %name,
                entries = total_entries,
                "no readable entries in collection"
            );
            report.collections_failed.push(name);
        } else {
            report.collections_read += 1;
        }
    }

    if report.collections_read == 0 {
        return Err(BuildError::AllSourcesUnreadable(total));
    }

    sort_documents(&mut docs);
    report.indexed = docs.len();
    let index = SearchIndex::new(docs)?;
    Ok((index, report))
}

/// Presentation order: featured first, newest first, then title.
pub fn sort_documents(docs: &mut [IndexableDocument]) {
    docs.sort_by(compare_documents);
}

/// Sort order:
/// 1. **Featured** - `featured: true` before everything else
/// 2. **Publish date** - descending; dated before undated
/// 3. **Title** - case-insensitive, ascending
/// 4. **Id** - makes the order total
pub fn compare_documents(a: &IndexableDocument, b: &IndexableDocument) -> Ordering {
    b.is_featured()
        .cmp(&a.is_featured())
        .then_with(|| match (&a.publish_date, &b.publish_date) {
            (Some(da), Some(db)) => db.cmp(da),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.id.cmp(&b.id))
}
