// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the folio CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `FOLIO_THEME` first, then `COLORFGBG`, then macOS system appearance, then
//! falls back to dark. `NO_COLOR` and non-TTY stdout turn every escape off,
//! borders included, so piped output stays plain text.
//!
//! # Theme detection order
//!
//! 1. `FOLIO_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use folio::{BuildReport, Category, Field, IndexSummary, QueryResponse};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Escape for a border color, empty without colors
fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` chars, ending in `…` when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (b, reset) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{b}│{reset}{}{}{b}│{reset}", content, " ".repeat(pad));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (b, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}┌{reset}{}{b}{}┐{reset}", label_part, "─".repeat(remaining));
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let (b, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}├{reset}{}{b}{}┤{reset}", label_part, "─".repeat(remaining));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (b, reset) = border(GRAY);
    println!("{b}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

/// Print double-line header: ╔══════════════════╗
pub fn double_header() {
    let (b, reset) = border(BLUE);
    println!("{b}╔{}╗{reset}", "═".repeat(BOX_WIDTH));
}

/// Print double-line footer: ╚══════════════════╝
pub fn double_footer() {
    let (b, reset) = border(BLUE);
    println!("{b}╚{}╝{reset}", "═".repeat(BOX_WIDTH));
}

/// Print centered title with bold
pub fn title(text: &str) {
    let (b, reset) = border(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!(
        "{b}║{reset}{}{}{}{b}║{reset}",
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad)
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded category badge
pub fn category_badge(category: Category) -> String {
    let text = format!("[{}]", category);
    let color_fn: fn() -> String = match category {
        Category::Projects => GREEN,
        Category::Blog => BLUE,
        Category::Tools => YELLOW,
        Category::Command => MAGENTA,
        Category::Services => CYAN,
    };
    themed(color_fn, &[], &text)
}

/// Color-coded score (lower is better)
pub fn score_value(score: f64) -> String {
    let text = format!("{:.3}", score);
    let color_fn: fn() -> String = if score < 0.1 {
        BRIGHT_GREEN
    } else if score < 0.3 {
        GREEN
    } else if score < 0.5 {
        YELLOW
    } else {
        RED
    };
    themed(color_fn, &[], &text)
}

pub fn field_label(field: Field) -> String {
    themed(GRAY, &[DIM], field.as_str())
}

fn count_row(label: &str, value: usize) {
    row(&format!(
        "  {}{}",
        pad_right(&themed(GRAY, &[], label), 24),
        themed(BRIGHT_CYAN, &[BOLD], &value.to_string())
    ));
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_build_report(report: &BuildReport, output: &str, elapsed_ms: f64) {
    section_top("BUILD");
    count_row("collections read", report.collections_read);
    count_row("collections failed", report.collections_failed.len());
    for name in &report.collections_failed {
        row(&format!("    {} {}", themed(RED, &[], "✗"), name));
    }
    count_row("documents indexed", report.indexed);
    count_row("drafts excluded", report.excluded);
    count_row("entries skipped", report.skipped);
    count_row("duplicate ids", report.duplicates);
    section_mid("OUTPUT");
    row(&format!("  {}", truncate(output, BOX_WIDTH - 4)));
    row(&format!(
        "  {}",
        themed(GRAY, &[DIM], &format!("built in {:.1} ms", elapsed_ms))
    ));
    section_bot();
}

pub fn print_response(query: &str, response: &QueryResponse) {
    section_top(&format!("RESULTS \"{}\"", truncate(query, 40)));
    if response.is_empty() {
        row(&format!("  {}", themed(GRAY, &[], "no results")));
        section_bot();
        return;
    }
    row(&format!(
        "  {}",
        themed(GRAY, &[DIM], &format!("{} matches", response.len()))
    ));

    for (category, results) in &response.grouped {
        section_mid(&category.as_str().to_uppercase());
        for result in results {
            row(&format!(
                "  {}  {}  {}",
                score_value(result.score),
                pad_right(&truncate(&result.title, 50), 50),
                field_label(result.matched_field)
            ));
            row(&format!(
                "         {}",
                themed(GRAY, &[DIM], &truncate(&result.url, BOX_WIDTH - 10))
            ));
        }
    }
    section_bot();
}

pub fn print_summary(path: &str, summary: &IndexSummary) {
    double_header();
    title("FOLIO SEARCH INDEX");
    double_footer();
    println!();

    section_top("INDEX");
    row(&format!("  {}", truncate(path, BOX_WIDTH - 4)));
    count_row("documents", summary.documents);
    count_row("content", summary.content);
    count_row("commands", summary.commands);
    count_row("featured", summary.featured);
    count_row("dated", summary.dated);
    count_row("tags", summary.tags);

    section_mid("CATEGORIES");
    for category in Category::ALL {
        let count = summary.by_category.get(&category).copied().unwrap_or(0);
        row(&format!(
            "  {}{}",
            pad_right(&category_badge(category), 24),
            count
        ));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
