// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Partition a ranked result list by category.

use crate::types::{Category, QueryResponse, QueryResult};
use std::collections::BTreeMap;

/// Build the response: the flat list as given, plus the same results grouped
/// by category with their relative order intact.
pub fn group_by_category(results: Vec<QueryResult>) -> QueryResponse {
    let mut grouped: BTreeMap<Category, Vec<QueryResult>> = BTreeMap::new();
    for result in &results {
        grouped.entry(result.category).or_default().push(result.clone());
    }
    QueryResponse { results, grouped }
}
