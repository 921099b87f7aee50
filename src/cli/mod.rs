// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Three subcommands: `index` builds `search-index.json` from a content
//! manifest, `search` queries a built index the same way the site does, and
//! `inspect` summarizes what an index holds.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Fuzzy site search index builder and query tool",
    version
)]
pub struct Cli {
    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the search index from a content manifest
    Index {
        /// Input directory containing manifest.json and collection files
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for search-index.json
        #[arg(short, long)]
        output: PathBuf,

        /// Also write search-index.js assigning the index to `window.<NAME>`
        #[arg(long, value_name = "NAME")]
        global: Option<String>,

        /// Pretty-print the JSON index
        #[arg(long)]
        pretty: bool,
    },

    /// Search a built index and display grouped results
    Search {
        /// Path to search-index.json
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Discard results scoring at or above this (0, 1]
        #[arg(short, long)]
        threshold: Option<f64>,

        /// JSON file with search settings (threshold, limit, weights)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a built index
    Inspect {
        /// Path to search-index.json
        file: PathBuf,
    },
}
