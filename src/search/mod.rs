// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Query engine: where the rubber meets the road.
//!
//! Everything before this point happened at build time. Here a keystroke
//! becomes a ranked, capped, grouped result set, synchronously, without
//! touching anything but the in-memory index.

mod engine;
pub mod group;
pub mod utils;

pub use engine::*;
