// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Source entry schemas and their mapping onto `IndexableDocument`.
//!
//! Each collection kind has its own shape (a post has an `excerpt`, a tool may
//! call its title `name`, a command has `keywords`). Mapping happens here and
//! only here; after it, every document looks the same.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::manifest::CollectionKind;
use crate::error::EntryError;
use crate::types::IndexableDocument;

/// What became of one source entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapped {
    Document(IndexableDocument),
    /// Draft or unpublished. Never indexed.
    Excluded,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default, alias = "pubDate", alias = "date")]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostEntry {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default, alias = "pubDate", alias = "date")]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ToolEntry {
    pub slug: String,
    /// Tools are labelled by `title` or `name`; `title` wins when both are set.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub url: Option<String>,
}

/// A command palette action.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommandEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "tags")]
    pub keywords: Vec<String>,
    pub url: String,
}

/// Fields every content collection shares once its own names are resolved.
struct ContentFields {
    slug: String,
    title: String,
    description: String,
    tags: Vec<String>,
    url: Option<String>,
    publish_date: Option<String>,
    featured: Option<bool>,
}

trait SourceEntry: DeserializeOwned {
    fn is_excluded(&self) -> bool;
    fn into_document(self, kind: CollectionKind) -> Result<IndexableDocument, EntryError>;
}

impl SourceEntry for ProjectEntry {
    fn is_excluded(&self) -> bool {
        self.draft || self.published == Some(false)
    }

    fn into_document(self, kind: CollectionKind) -> Result<IndexableDocument, EntryError> {
        content_document(
            kind,
            ContentFields {
                slug: self.slug,
                title: self.title,
                description: self.description,
                tags: self.tags,
                url: self.url,
                publish_date: self.publish_date,
                featured: self.featured,
            },
        )
    }
}

impl SourceEntry for BlogPostEntry {
    fn is_excluded(&self) -> bool {
        self.draft || self.published == Some(false)
    }

    fn into_document(self, kind: CollectionKind) -> Result<IndexableDocument, EntryError> {
        content_document(
            kind,
            ContentFields {
                slug: self.slug,
                title: self.title,
                description: self.excerpt,
                tags: self.tags,
                url: self.url,
                publish_date: self.publish_date,
                featured: self.featured,
            },
        )
    }
}

impl SourceEntry for ToolEntry {
    fn is_excluded(&self) -> bool {
        self.draft
    }

    fn into_document(self, kind: CollectionKind) -> Result<IndexableDocument, EntryError> {
        content_document(
            kind,
            ContentFields {
                slug: self.slug,
                title: self
                    .title
                    .filter(|t| !t.trim().is_empty())
                    .or(self.name)
                    .unwrap_or_default(),
                description: self.description,
                tags: self.tags,
                url: self.url,
                publish_date: None,
                featured: None,
            },
        )
    }
}

impl SourceEntry for ServiceEntry {
    fn is_excluded(&self) -> bool {
        self.draft
    }

    fn into_document(self, kind: CollectionKind) -> Result<IndexableDocument, EntryError> {
        content_document(
            kind,
            ContentFields {
                slug: self.slug,
                title: self.title,
                description: self.description,
                tags: self.tags,
                url: self.url,
                publish_date: None,
                featured: self.featured,
            },
        )
    }
}

impl SourceEntry for CommandEntry {
    fn is_excluded(&self) -> bool {
        false
    }

    fn into_document(self, kind: CollectionKind) -> Result<IndexableDocument, EntryError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(EntryError::EmptySlug);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(EntryError::EmptyTitle);
        }
        Ok(IndexableDocument {
            id: format!("{}:{}", kind.category(), id),
            title: title.to_string(),
            description: self.description,
            tags: self.keywords,
            category: kind.category(),
            url: self.url,
            kind: kind.doc_kind(),
            publish_date: None,
            featured: None,
        })
    }
}

fn content_document(
    kind: CollectionKind,
    fields: ContentFields,
) -> Result<IndexableDocument, EntryError> {
    let slug = fields.slug.trim();
    if slug.is_empty() {
        return Err(EntryError::EmptySlug);
    }
    let title = fields.title.trim();
    if title.is_empty() {
        return Err(EntryError::EmptyTitle);
    }
    let publish_date = fields
        .publish_date
        .as_deref()
        .map(parse_publish_date)
        .transpose()?;
    let category = kind.category();

    Ok(IndexableDocument {
        id: format!("{}:{}", category, slug),
        title: title.to_string(),
        description: fields.description,
        tags: fields.tags,
        category,
        url: fields
            .url
            .unwrap_or_else(|| format!("/{}/{}", category, slug)),
        kind: kind.doc_kind(),
        publish_date,
        featured: fields.featured,
    })
}

fn map_typed<T: SourceEntry>(
    kind: CollectionKind,
    value: serde_json::Value,
) -> Result<Mapped, EntryError> {
    let entry: T = serde_json::from_value(value)?;
    if entry.is_excluded() {
        return Ok(Mapped::Excluded);
    }
    entry.into_document(kind).map(Mapped::Document)
}

/// Parse one raw entry of a collection and map it to a document.
pub fn map_entry(kind: CollectionKind, value: serde_json::Value) -> Result<Mapped, EntryError> {
    match kind {
        CollectionKind::Projects => map_typed::<ProjectEntry>(kind, value),
        CollectionKind::Blog => map_typed::<BlogPostEntry>(kind, value),
        CollectionKind::Tools => map_typed::<ToolEntry>(kind, value),
        CollectionKind::Services => map_typed::<ServiceEntry>(kind, value),
        CollectionKind::Commands => map_typed::<CommandEntry>(kind, value),
    }
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` and bare `YYYY-MM-DD`
/// (midnight UTC). Frontmatter uses all three.
pub fn parse_publish_date(raw: &str) -> Result<DateTime<Utc>, EntryError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(EntryError::Date(raw.to_string()))
}
