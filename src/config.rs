// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Search settings.
//!
//! Read from a JSON file by the CLI or from the options object in the browser.
//! Every field has a default, so `{}` is a valid config.

use crate::error::ConfigError;
use crate::scoring::{
    DEFAULT_LIMIT, DEFAULT_LOCATION_DISTANCE, DEFAULT_THRESHOLD, DESCRIPTION_WEIGHT, TAGS_WEIGHT,
    TITLE_WEIGHT,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Candidates scoring at or above this are discarded.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Maximum number of results per query.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Chars from the field start at which the location penalty reaches 1.0.
    #[serde(default = "default_location_distance")]
    pub location_distance: usize,
    #[serde(default)]
    pub weights: FieldWeights,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_limit() -> usize {
    DEFAULT_LIMIT
}
fn default_location_distance() -> usize {
    DEFAULT_LOCATION_DISTANCE
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
            location_distance: DEFAULT_LOCATION_DISTANCE,
            weights: FieldWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate a config JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if self.limit == 0 {
            return Err(ConfigError::Limit);
        }
        if self.location_distance == 0 {
            return Err(ConfigError::Distance);
        }
        self.weights.validate()
    }
}

/// Per-field weights in `(0, 1]`. Title should stay the heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f64,
    pub description: f64,
    pub tags: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: TITLE_WEIGHT,
            description: DESCRIPTION_WEIGHT,
            tags: TAGS_WEIGHT,
        }
    }
}

impl FieldWeights {
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("title", self.title),
            ("description", self.description),
            ("tags", self.tags),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Weight { field, value });
            }
        }
        Ok(())
    }
}
