// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Three layers, three enums. `EntryError` never escapes a build: it is logged
//! and the entry is skipped. `BuildError` is what a build returns when it cannot
//! produce an index at all. `IndexError` covers loading and validating a
//! persisted index. Query-time code has no error type because a query cannot fail.

use std::path::PathBuf;
use thiserror::Error;

/// A single source entry that could not be mapped to a document.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("invalid entry shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("unparsable publish date {0:?}")]
    Date(String),

    #[error("entry has an empty title")]
    EmptyTitle,

    #[error("entry has an empty slug")]
    EmptySlug,

    #[error("failed to read entry: {0}")]
    Io(#[from] std::io::Error),
}

/// A whole collection that could not be read.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} does not hold a JSON array of entries")]
    NotAnArray { path: PathBuf },
}

/// Fatal index build failures.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read manifest {path}: {source}")]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {path}: {source}")]
    ManifestJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported manifest version {0} (expected 1)")]
    ManifestVersion(u32),

    #[error("manifest configures no collections")]
    NoCollections,

    #[error("all {0} configured collections were unreadable")]
    AllSourcesUnreadable(usize),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("{0:?} is not a valid JavaScript identifier")]
    GlobalName(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize index: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Loading or validating a persisted index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read index {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid index JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate document id {0:?}")]
    DuplicateId(String),

    #[error("document {0:?} has an empty title")]
    EmptyTitle(String),
}

/// Unreadable or out-of-range search settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("threshold must be in (0, 1], got {0}")]
    Threshold(f64),

    #[error("{field} weight must be in (0, 1], got {value}")]
    Weight { field: &'static str, value: f64 },

    #[error("location distance must be positive")]
    Distance,

    #[error("result limit must be positive")]
    Limit,
}
