// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! folio - build and query the site search index.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio::{run_build, BuildOptions, QueryEngine, SearchConfig, SearchIndex, INDEX_FILE};

mod cli;
use cli::{display, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,folio=info",
        1 => "info,folio=debug",
        2 => "debug,folio=trace",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Index {
            input,
            output,
            global,
            pretty,
        } => index(&input, &output, BuildOptions { global, pretty }),
        Commands::Search {
            file,
            query,
            limit,
            threshold,
            config,
            json,
        } => {
            let mut settings = match config {
                Some(path) => SearchConfig::from_file(&path)
                    .with_context(|| format!("loading search config {}", path.display()))?,
                None => SearchConfig::default(),
            };
            if let Some(limit) = limit {
                settings.limit = limit;
            }
            if let Some(threshold) = threshold {
                settings.threshold = threshold;
            }
            search(&file, &query, settings, json)
        }
        Commands::Inspect { file } => inspect(&file),
    }
}

fn index(input: &Path, output: &Path, options: BuildOptions) -> Result<()> {
    let start = Instant::now();
    let report = run_build(input, output, &options)
        .with_context(|| format!("building index from {}", input.display()))?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let written = output.join(INDEX_FILE);
    display::print_build_report(&report, &written.display().to_string(), elapsed_ms);
    Ok(())
}

fn search(file: &Path, query: &str, config: SearchConfig, json: bool) -> Result<()> {
    let index =
        SearchIndex::load(file).with_context(|| format!("loading index {}", file.display()))?;
    let engine = QueryEngine::with_config(index, config).context("invalid search settings")?;

    let start = Instant::now();
    let response = engine.query(query);
    tracing::debug!(
        query,
        results = response.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "query complete"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display::print_response(query, &response);
    }
    Ok(())
}

fn inspect(file: &Path) -> Result<()> {
    let index =
        SearchIndex::load(file).with_context(|| format!("loading index {}", file.display()))?;
    display::print_summary(&file.display().to_string(), &index.summary());
    Ok(())
}
