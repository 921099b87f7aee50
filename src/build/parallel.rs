// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Parallel collection loading.
//!
//! Reading collections is the only I/O in a build, and collections are
//! independent, so Rayon reads them side by side. `par_iter().collect()` keeps
//! manifest order, which means the assembled index is identical with or
//! without the `parallel` feature.
//!
//! Failures are split by scope. A collection that cannot be read at all is an
//! `Err` for that collection. A single bad file inside a directory collection
//! is an `Err` for that entry only.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use super::manifest::CollectionDef;
use crate::error::{CollectionError, EntryError};

/// One raw entry and where it came from.
#[derive(Debug)]
pub struct RawEntry {
    /// `file.json[3]` or `dir/post.json`, for log messages.
    pub source: String,
    pub value: Result<serde_json::Value, EntryError>,
}

/// A collection as read from disk, not yet mapped.
#[derive(Debug)]
pub struct LoadedCollection {
    pub def: CollectionDef,
    pub entries: Result<Vec<RawEntry>, CollectionError>,
}

/// Read one collection: a JSON array file, or a directory of entry files.
pub fn read_collection(base: &Path, def: &CollectionDef) -> Result<Vec<RawEntry>, CollectionError> {
    let path = base.join(&def.path);
    if path.is_dir() {
        read_entry_dir(&path)
    } else {
        read_entry_array(&path)
    }
}

fn read_entry_array(path: &Path) -> Result<Vec<RawEntry>, CollectionError> {
    let content = fs::read_to_string(path).map_err(|source| CollectionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| CollectionError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let serde_json::Value::Array(items) = value else {
        return Err(CollectionError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let label = path.display().to_string();
    Ok(items
        .into_iter()
        .enumerate()
        .map(|(i, value)| RawEntry {
            source: format!("{}[{}]", label, i),
            value: Ok(value),
        })
        .collect())
}

fn read_entry_dir(path: &Path) -> Result<Vec<RawEntry>, CollectionError> {
    let io_err = |source| CollectionError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(io_err)? {
        let file = entry.map_err(io_err)?.path();
        if file.is_file() && file.extension().is_some_and(|ext| ext == "json") {
            files.push(file);
        }
    }
    // Directory order is platform-dependent
    files.sort();

    Ok(files
        .into_iter()
        .map(|file| {
            let value = fs::read_to_string(&file)
                .map_err(EntryError::from)
                .and_then(|content| serde_json::from_str(&content).map_err(EntryError::from));
            RawEntry {
                source: file.display().to_string(),
                value,
            }
        })
        .collect())
}

/// Load every collection, in parallel when the feature is on.
pub fn load_collections(base: &Path, defs: &[CollectionDef]) -> Vec<LoadedCollection> {
    let load = |def: &CollectionDef| LoadedCollection {
        def: def.clone(),
        entries: read_collection(base, def),
    };

    #[cfg(feature = "parallel")]
    let loaded = defs.par_iter().map(load).collect();
    #[cfg(not(feature = "parallel"))]
    let loaded = defs.iter().map(load).collect();

    loaded
}

/// Load every collection in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_collections_with_progress(
    base: &Path,
    defs: &[CollectionDef],
    progress: &ProgressBar,
) -> Vec<LoadedCollection> {
    let counter = AtomicUsize::new(0);

    defs.par_iter()
        .map(|def| {
            let loaded = LoadedCollection {
                def: def.clone(),
                entries: read_collection(base, def),
            };

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            progress.set_message(def.name.clone());

            loaded
        })
        .collect()
}
