//! Custom cargo commands for folio.
//!
//! Usage:
//!   cargo xtask ci        - Everything CI runs
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask test      - Run all tests, every feature set
//!   cargo xtask wasm      - Build the browser module
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("ci") => ci()?,
        Some("check") => check()?,
        Some("test") => test()?,
        Some("wasm") => wasm()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  ci        Run check, all feature-set tests and the wasm build
  check     Quick check (cargo check + test + clippy)
  test      Run tests with default features and with none
  wasm      Build the wasm32 browser module
  bench     Run benchmarks
"#
    );
}

fn ci() -> Result<()> {
    println!("==========================================");
    println!("folio CI");
    println!("==========================================\n");

    println!("[1/3] Quick checks...");
    check()?;
    println!();

    println!("[2/3] Feature-set tests...");
    test()?;
    println!("✓ Tests passed\n");

    println!("[3/3] wasm build...");
    wasm()?;
    println!("✓ wasm module builds\n");

    println!("==========================================");
    println!("✓ ALL CHECKS PASSED");
    println!("==========================================");
    Ok(())
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Default features, then the bare library (no rayon, no unicode tables)
fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--lib", "--no-default-features"])
}

fn wasm() -> Result<()> {
    run_cargo(&[
        "build",
        "--release",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--no-default-features",
        "--features",
        "wasm",
    ])?;

    let artifact = project_root()?.join("target/wasm32-unknown-unknown/release/folio.wasm");
    if !artifact.exists() {
        bail!("expected wasm artifact at {}", artifact.display());
    }
    let size = std::fs::metadata(&artifact)
        .with_context(|| format!("Failed to stat {}", artifact.display()))?
        .len();
    println!("  {} ({} KB)", artifact.display(), size / 1024);
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
