// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the builder and the query engine.
//!
//! Text normalization for case- and accent-insensitive matching. Documents and
//! queries go through the same function, otherwise nothing lines up.

pub mod normalize;
