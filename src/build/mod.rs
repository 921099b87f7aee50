// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! The index build step: manifest in, `search-index.json` out.

pub mod assemble;
pub mod document;
pub mod manifest;
pub mod parallel;

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::error::BuildError;
use crate::index::SearchIndex;

pub use assemble::*;
pub use document::*;
pub use manifest::*;
pub use parallel::*;

/// The persisted index.
pub const INDEX_FILE: &str = "search-index.json";

/// Script assigning the index to a page global, when requested.
pub const GLOBAL_FILE: &str = "search-index.js";

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Also emit `search-index.js` setting `window.<global>`.
    pub global: Option<String>,
    /// Pretty-print the JSON artifact.
    pub pretty: bool,
}

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

pub fn read_manifest(input_dir: &Path) -> Result<InputManifest, BuildError> {
    let path = input_dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path).map_err(|source| BuildError::ManifestIo {
        path: path.clone(),
        source,
    })?;
    let manifest: InputManifest =
        serde_json::from_str(&content).map_err(|source| BuildError::ManifestJson {
            path: path.clone(),
            source,
        })?;
    if manifest.version != MANIFEST_VERSION {
        return Err(BuildError::ManifestVersion(manifest.version));
    }
    Ok(manifest)
}

/// Build the index in memory without writing anything.
pub fn build_from_dir(input_dir: &Path) -> Result<(SearchIndex, BuildReport), BuildError> {
    let manifest = read_manifest(input_dir)?;
    let collections = load_collections(input_dir, &manifest.collections);
    assemble_index(collections)
}

/// Full build: read the manifest, load collections, assemble, write artifacts.
pub fn run_build(
    input_dir: &Path,
    output_dir: &Path,
    options: &BuildOptions,
) -> Result<BuildReport, BuildError> {
    if let Some(name) = &options.global {
        if !is_js_identifier(name) {
            return Err(BuildError::GlobalName(name.clone()));
        }
    }

    // 1. Read manifest
    let manifest = read_manifest(input_dir)?;
    tracing::info!(
        collections = manifest.collections.len(),
        input = %input_dir.display(),
        "building search index"
    );

    // 2. Load collections in parallel with progress bar
    #[cfg(feature = "parallel")]
    let collections = {
        let multi = MultiProgress::new();
        let load_pb = multi.add(ProgressBar::new(manifest.collections.len() as u64));
        load_pb.set_style(create_progress_style());
        load_pb.set_prefix("Loading");
        load_pb.set_message("collections...");
        let collections = load_collections_with_progress(input_dir, &manifest.collections, &load_pb);
        load_pb.finish_with_message(format!("read {} collections", collections.len()));
        collections
    };
    #[cfg(not(feature = "parallel"))]
    let collections = load_collections(input_dir, &manifest.collections);

    // 3. Map, filter, sort
    let (index, report) = assemble_index(collections)?;

    // 4. Write artifacts
    fs::create_dir_all(output_dir).map_err(|source| BuildError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let json = if options.pretty {
        index.to_json_pretty()
    } else {
        index.to_json()
    }
    .map_err(BuildError::Serialize)?;
    write_artifact(&output_dir.join(INDEX_FILE), &json)?;

    if let Some(name) = &options.global {
        let script = index.to_js_global(name).map_err(BuildError::Serialize)?;
        write_artifact(&output_dir.join(GLOBAL_FILE), &script)?;
    }

    tracing::info!(
        indexed = report.indexed,
        excluded = report.excluded,
        skipped = report.skipped,
        "search index written"
    );
    Ok(report)
}

fn write_artifact(path: &Path, content: &str) -> Result<(), BuildError> {
    fs::write(path, content).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote artifact");
    Ok(())
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
