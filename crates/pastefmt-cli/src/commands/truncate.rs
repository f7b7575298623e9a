//! `pastefmt truncate`: shorten text with an ellipsis.

use std::io::{BufRead, Write};

use pastefmt_core::{LengthUnit, truncate_signed};
use serde::Serialize;
use tracing::debug;

use crate::error::CliResult;

/// Options for a single `truncate` invocation.
#[derive(Debug, Clone, Copy)]
pub struct TruncateOptions {
    /// Maximum length before the ellipsis; negative marks every text.
    pub limit: i64,
    /// How length is measured.
    pub unit: LengthUnit,
    /// Emit JSON lines instead of plain text.
    pub json: bool,
}

#[derive(Serialize)]
struct TruncateLine<'a> {
    text: &'a str,
    truncated: bool,
    length: usize,
}

/// Picks the `--limit` value, falling back to the configured `default`.
///
/// Negative limits are kept: they turn every text, even an empty one, into
/// just the ellipsis.
pub fn resolve_limit(limit: Option<i64>, default: usize) -> i64 {
    match limit {
        Some(l) => {
            if l < 0 {
                debug!(limit = l, "negative limit, every text becomes the ellipsis");
            }
            l
        }
        None => i64::try_from(default).unwrap_or(i64::MAX),
    }
}

/// Truncates `text`, or every line of `input` when `text` is `None`.
pub fn run<W: Write, R: BufRead>(
    out: &mut W,
    text: Option<&str>,
    input: R,
    options: TruncateOptions,
) -> CliResult<()> {
    debug!(limit = options.limit, unit = ?options.unit, "truncating");

    match text {
        Some(text) => write_one(out, text, options),
        None => {
            for line in input.lines() {
                write_one(out, &line?, options)?;
            }
            Ok(())
        }
    }
}

fn write_one<W: Write>(out: &mut W, text: &str, options: TruncateOptions) -> CliResult<()> {
    let result = truncate_signed(text, options.limit, options.unit);

    if options.json {
        let line = TruncateLine {
            text: &result,
            truncated: result != text,
            length: options.unit.measure(text),
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", result)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn options(limit: i64) -> TruncateOptions {
        TruncateOptions {
            limit,
            unit: LengthUnit::Chars,
            json: false,
        }
    }

    fn run_to_string(text: Option<&str>, stdin: &str, options: TruncateOptions) -> String {
        let mut out = Vec::new();
        run(&mut out, text, Cursor::new(stdin.as_bytes()), options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn argument_text() {
        assert_eq!(run_to_string(Some("hello"), "", options(3)), "hel...\n");
        assert_eq!(run_to_string(Some("hi"), "", options(10)), "hi\n");
    }

    #[test]
    fn argument_takes_precedence_over_stdin() {
        assert_eq!(run_to_string(Some("hi"), "ignored\n", options(10)), "hi\n");
    }

    #[test]
    fn stdin_lines() {
        let out = run_to_string(None, "first line\nok\n\nlonger line here\n", options(5));
        assert_eq!(out, "first...\nok\n\nlonge...\n");
    }

    #[test]
    fn utf16_unit() {
        let opts = TruncateOptions {
            unit: LengthUnit::Utf16,
            ..options(1)
        };
        assert_eq!(run_to_string(Some("😀x"), "", opts), "\u{FFFD}...\n");
    }

    #[test]
    fn json_output() {
        let opts = TruncateOptions {
            json: true,
            ..options(3)
        };
        let out = run_to_string(None, "hello\nhi\n", opts);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            lines,
            vec![
                serde_json::json!({"text": "hel...", "truncated": true, "length": 5}),
                serde_json::json!({"text": "hi", "truncated": false, "length": 2}),
            ]
        );
    }

    #[test]
    fn limit_resolution() {
        assert_eq!(resolve_limit(Some(5), 80), 5);
        assert_eq!(resolve_limit(Some(0), 80), 0);
        assert_eq!(resolve_limit(Some(-3), 80), -3);
        assert_eq!(resolve_limit(None, 80), 80);
    }

    #[test]
    fn negative_limit_marks_even_empty_text() {
        let limit = resolve_limit(Some(-1), 80);
        assert_eq!(run_to_string(Some("hello"), "", options(limit)), "...\n");
        assert_eq!(run_to_string(Some(""), "", options(limit)), "...\n");
    }

    #[test]
    fn zero_limit_keeps_empty_text() {
        assert_eq!(run_to_string(Some(""), "", options(0)), "\n");
        assert_eq!(run_to_string(Some("hello"), "", options(0)), "...\n");
    }

    #[test]
    fn negative_limit_json_reports_truncation() {
        let opts = TruncateOptions {
            json: true,
            ..options(-1)
        };
        let out = run_to_string(Some(""), "", opts);
        let line: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(
            line,
            serde_json::json!({"text": "...", "truncated": true, "length": 0})
        );
    }
}
