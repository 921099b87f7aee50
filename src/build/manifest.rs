// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! The build manifest: which content collections feed the index.

use crate::types::{Category, DocKind};
use serde::Deserialize;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    pub collections: Vec<CollectionDef>,
}

/// One content collection.
#[derive(Deserialize, Clone, Debug)]
pub struct CollectionDef {
    /// Label for logs and the build report.
    pub name: String,
    pub kind: CollectionKind,
    /// Relative to the manifest directory. A `.json` file holding an array of
    /// entries, or a directory with one entry per `.json` file.
    pub path: String,
}

/// Source schema of a collection. Decides how entries are parsed and mapped.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Projects,
    Blog,
    Tools,
    Services,
    Commands,
}

impl CollectionKind {
    pub fn category(self) -> Category {
        match self {
            CollectionKind::Projects => Category::Projects,
            CollectionKind::Blog => Category::Blog,
            CollectionKind::Tools => Category::Tools,
            CollectionKind::Services => Category::Services,
            CollectionKind::Commands => Category::Command,
        }
    }

    pub fn doc_kind(self) -> DocKind {
        match self {
            CollectionKind::Commands => DocKind::Command,
            _ => DocKind::Content,
        }
    }
}
