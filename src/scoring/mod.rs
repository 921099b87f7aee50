// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores are distances, so lower is better and 0 is a perfect hit. Field
//! weights push description and tag matches away from 0 so that, all else
//! equal, a title match ranks first.

mod core;
pub mod ranking;

pub use core::*;
