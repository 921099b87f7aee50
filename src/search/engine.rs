// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! The query engine.
//!
//! Construction normalizes every searchable field once. A query then scans
//! the prepared fields, keeps each document's best weighted field score,
//! drops everything at or above the threshold, ranks, caps and groups.
//!
//! The engine is given its index; it never reaches for a global. It holds no
//! per-query state, so one engine can serve any number of concurrent callers.

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::fuzzy::{for_each_match, starts_word};
use crate::index::SearchIndex;
use crate::scoring::ranking::{rank, Candidate};
use crate::scoring::{max_errors, raw_score, weighted_score};
use crate::search::group::group_by_category;
use crate::search::utils::parse_query;
use crate::types::{Field, QueryResponse, QueryResult};
use crate::util::normalize::normalized_chars;

/// Normalized searchable fields of one document.
#[derive(Debug, Clone)]
struct PreparedDoc {
    title: Vec<char>,
    description: Vec<char>,
    tags: Vec<Vec<char>>,
}

#[derive(Debug, Clone)]
pub struct QueryEngine {
    index: SearchIndex,
    prepared: Vec<PreparedDoc>,
    config: SearchConfig,
}

impl QueryEngine {
    /// Engine with the default settings (threshold 0.6, 10 results).
    pub fn new(index: SearchIndex) -> Self {
        Self::build(index, SearchConfig::default())
    }

    pub fn with_config(index: SearchIndex, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(index, config))
    }

    fn build(index: SearchIndex, config: SearchConfig) -> Self {
        let prepared = index
            .docs()
            .iter()
            .map(|doc| PreparedDoc {
                title: normalized_chars(&doc.title),
                description: normalized_chars(&doc.description),
                tags: doc.tags.iter().map(|t| normalized_chars(t)).collect(),
            })
            .collect();
        Self {
            index,
            prepared,
            config,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run a query.
    ///
    /// Empty or whitespace-only queries and empty indexes give an empty
    /// response, never an error.
    pub fn query(&self, query: &str) -> QueryResponse {
        let pattern = parse_query(query);
        if pattern.is_empty() || self.index.is_empty() {
            return QueryResponse::empty();
        }

        let max = max_errors(pattern.len(), self.config.threshold);
        let candidates: Vec<Candidate> = self
            .prepared
            .iter()
            .enumerate()
            .filter_map(|(position, doc)| {
                let (score, field) = self.score_document(&pattern, doc, max)?;
                (score < self.config.threshold).then_some(Candidate {
                    position,
                    score,
                    field,
                })
            })
            .collect();

        let results = rank(candidates, self.config.limit)
            .into_iter()
            .filter_map(|c| {
                self.index
                    .get(c.position)
                    .map(|doc| QueryResult::from_document(doc, c.score, c.field))
            })
            .collect();

        group_by_category(results)
    }

    /// Best weighted score over all fields. Ties go to the heavier field.
    fn score_document(
        &self,
        pattern: &[char],
        doc: &PreparedDoc,
        max_errors: usize,
    ) -> Option<(f64, Field)> {
        let weights = self.config.weights;
        let fields = std::iter::once((Field::Title, &doc.title, weights.title))
            .chain(std::iter::once((
                Field::Description,
                &doc.description,
                weights.description,
            )))
            .chain(doc.tags.iter().map(|tag| (Field::Tags, tag, weights.tags)));

        let mut best: Option<(f64, Field)> = None;
        for (field, text, weight) in fields {
            let Some(score) = self.field_score(pattern, text, weight, max_errors) else {
                continue;
            };
            if best.map_or(true, |(current, _)| score < current) {
                best = Some((score, field));
            }
        }
        best
    }

    /// Best weighted score over every place the pattern fits in `text`.
    fn field_score(
        &self,
        pattern: &[char],
        text: &[char],
        weight: f64,
        max_errors: usize,
    ) -> Option<f64> {
        let mut best: Option<f64> = None;
        for_each_match(pattern, text, max_errors, |m| {
            let raw = raw_score(
                m.errors,
                m.start,
                starts_word(text, m.start),
                pattern.len(),
                self.config.location_distance,
            );
            if best.map_or(true, |b| raw < b) {
                best = Some(raw);
            }
        });
        best.map(|raw| weighted_score(raw, weight))
    }
}

/// One-shot convenience: build an engine and run a single query.
pub fn query(index: &SearchIndex, query: &str) -> QueryResponse {
    QueryEngine::new(index.clone()).query(query)
}
