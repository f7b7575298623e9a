//! Golden tests for rendered paste listings.
//!
//! These use insta inline snapshots; run `cargo insta review` after
//! intentional output changes.

use chrono::{DateTime, TimeZone, Utc};

use crate::relative::relative_time_at;
use crate::truncate::{LengthUnit, truncate};

/// Fixed reference time for deterministic output.
fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 5, 12, 0, 0).unwrap()
}

/// A paste as it arrives from the listing API: title and epoch seconds.
struct PasteRow {
    title: &'static str,
    posted: String,
}

fn row(title: &'static str, seconds_ago: i64) -> PasteRow {
    PasteRow {
        title,
        posted: (reference_time().timestamp() - seconds_ago).to_string(),
    }
}

fn render(rows: &[PasteRow], limit: usize, unit: LengthUnit) -> String {
    let now = reference_time();
    rows.iter()
        .map(|r| {
            format!(
                "{} | {}",
                truncate(r.title, limit, unit),
                relative_time_at(&r.posted, now)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn sample_rows() -> Vec<PasteRow> {
    vec![
        row("hello.rs", 1),
        row("Deploy notes for the staging cluster", 89),
        row("Untitled", 90),
        row("crash log", 3 * 3600),
        row("config.toml", 23 * 3600 + 1800),
        row("SQL migration draft", 25 * 3600),
        row("old snippet", 30 * 86_400),
    ]
}

#[test]
fn golden_listing_chars() {
    let output = render(&sample_rows(), 16, LengthUnit::Chars);

    insta::assert_snapshot!(output, @r"
    hello.rs | 1 second ago
    Deploy notes for... | 1 minute ago
    Untitled | 2 minutes ago
    crash log | 3 hours ago
    config.toml | 24 hours ago
    SQL migration dr... | 1 day ago
    old snippet | 30 days ago
    ");
}

#[test]
fn golden_listing_malformed_timestamps() {
    let now = reference_time();
    let rows = ["", "abc", "  1738756800", "1738756800.75", "+1738749600"];
    let output = rows
        .iter()
        .map(|ts| format!("{:?} -> {}", ts, relative_time_at(ts, now)))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(output, @r#"
    "" -> NaN seconds ago
    "abc" -> NaN seconds ago
    "  1738756800" -> 0 seconds ago
    "1738756800.75" -> 0 seconds ago
    "+1738749600" -> 2 hours ago
    "#);
}

#[test]
fn golden_listing_utf16() {
    let rows = vec![row("😀😀😀 emoji paste", 45), row("naïve café", 600)];
    let output = render(&rows, 5, LengthUnit::Utf16);

    insta::assert_snapshot!(output, @r"
    😀😀�... | 45 seconds ago
    naïve... | 10 minutes ago
    ");
}
