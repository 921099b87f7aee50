//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{Category, SearchIndex};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{make_doc, make_doc_full};

// ============================================================================
// IN-MEMORY INDEXES
// ============================================================================

/// The two-document index from the React example.
pub fn react_index() -> SearchIndex {
    SearchIndex::new(vec![
        make_doc_full(
            "react-post",
            "Blog Post About React",
            "Learn about React hooks",
            &["react", "hooks"],
            Category::Blog,
        ),
        make_doc_full(
            "web-project",
            "Web Development Project",
            "A full stack web app",
            &["web"],
            Category::Projects,
        ),
    ])
    .unwrap()
}

/// `count` blog posts titled "Test Document N".
pub fn synthetic_index(count: usize) -> SearchIndex {
    SearchIndex::new(
        (0..count)
            .map(|i| make_doc(&format!("doc-{}", i), &format!("Test Document {}", i)))
            .collect(),
    )
    .unwrap()
}

/// A small site: one document per category, overlapping vocabulary.
pub fn portfolio_index() -> SearchIndex {
    SearchIndex::new(vec![
        make_doc_full(
            "parser",
            "Incremental Parser",
            "A tree-sitter style parser written in Rust",
            &["rust", "compilers"],
            Category::Projects,
        ),
        make_doc_full(
            "rust-errors",
            "Error Handling in Rust",
            "Result, the question mark operator and friends",
            &["rust", "errors"],
            Category::Blog,
        ),
        make_doc_full(
            "json-formatter",
            "JSON Formatter",
            "Pretty-print and validate JSON in the browser",
            &["json", "formatter"],
            Category::Tools,
        ),
        make_doc_full(
            "toggle-theme",
            "Toggle Theme",
            "Switch between light and dark mode",
            &["dark", "light", "theme"],
            Category::Command,
        ),
        make_doc_full(
            "consulting",
            "Rust Consulting",
            "Code review and performance work",
            &["rust", "consulting"],
            Category::Services,
        ),
    ])
    .unwrap()
}

// ============================================================================
// ON-DISK SITES
// ============================================================================

pub fn write_json(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

pub fn write_manifest(dir: &Path, collections: Value) {
    write_json(
        &dir.join("manifest.json"),
        &json!({ "version": 1, "collections": collections }),
    );
}

/// A complete content directory with every collection kind, one draft and
/// one blog post per file.
pub fn write_site(dir: &Path) {
    write_manifest(
        dir,
        json!([
            { "name": "projects", "kind": "projects", "path": "projects.json" },
            { "name": "blog",     "kind": "blog",     "path": "blog" },
            { "name": "tools",    "kind": "tools",    "path": "tools.json" },
            { "name": "services", "kind": "services", "path": "services.json" },
            { "name": "palette",  "kind": "commands", "path": "commands.json" }
        ]),
    );

    write_json(
        &dir.join("projects.json"),
        &json!([
            {
                "slug": "folio",
                "title": "Folio",
                "description": "Fuzzy search for static sites",
                "tags": ["rust", "search"],
                "featured": true,
                "publishDate": "2024-03-01"
            },
            {
                "slug": "raytracer",
                "title": "Raytracer",
                "description": "A weekend raytracer",
                "tags": ["graphics"],
                "publishDate": "2023-06-15"
            }
        ]),
    );

    write_json(
        &dir.join("blog/public-post.json"),
        &json!({
            "slug": "public-post",
            "title": "Public Post",
            "excerpt": "Everyone can read this",
            "tags": ["meta"],
            "publishDate": "2024-05-01T09:30:00Z"
        }),
    );
    write_json(
        &dir.join("blog/secret-draft.json"),
        &json!({
            "slug": "secret-draft",
            "title": "Secret Draft",
            "excerpt": "Not ready yet",
            "draft": true
        }),
    );

    write_json(
        &dir.join("tools.json"),
        &json!([
            { "slug": "json", "name": "JSON Formatter", "description": "Format JSON", "tags": ["json"] }
        ]),
    );

    write_json(
        &dir.join("services.json"),
        &json!([
            { "slug": "consulting", "title": "Consulting", "description": "Rust consulting" }
        ]),
    );

    write_json(
        &dir.join("commands.json"),
        &json!([
            {
                "id": "toggle-theme",
                "title": "Toggle Theme",
                "description": "Switch between light and dark",
                "keywords": ["dark", "light"],
                "url": "#theme"
            }
        ]),
    );
}

pub fn ids(index: &SearchIndex) -> Vec<String> {
    index.docs().iter().map(|d| d.id.clone()).collect()
}
