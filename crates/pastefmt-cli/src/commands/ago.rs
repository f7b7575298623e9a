//! `pastefmt ago`: relative time labels for epoch timestamps.

use std::io::Write;

use chrono::{DateTime, Utc};
use pastefmt_core::{FormatError, RelativeTime, try_relative_time_at};
use serde::Serialize;
use tracing::debug;

use crate::error::CliResult;

/// Options for a single `ago` invocation.
#[derive(Debug, Clone, Copy)]
pub struct AgoOptions {
    /// Reference time.
    pub now: DateTime<Utc>,
    /// Reject malformed and future timestamps.
    pub strict: bool,
    /// Emit JSON lines instead of plain labels.
    pub json: bool,
}

#[derive(Serialize)]
struct AgoLine<'a> {
    timestamp: &'a str,
    #[serde(flatten)]
    relative: RelativeTime,
}

/// Resolves the `--now` flag to a reference time.
pub fn reference_time(now: Option<i64>) -> CliResult<DateTime<Utc>> {
    let Some(seconds) = now else {
        return Ok(Utc::now());
    };
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or_else(|| FormatError::TimestampOutOfRange(seconds).into())
}

/// Writes one relative time per timestamp.
///
/// In strict mode the first rejected timestamp aborts the command; lines
/// already written stay written.
pub fn run<W: Write>(out: &mut W, timestamps: &[String], options: AgoOptions) -> CliResult<()> {
    debug!(
        count = timestamps.len(),
        strict = options.strict,
        now = %options.now,
        "formatting timestamps"
    );

    for timestamp in timestamps {
        let relative = if options.strict {
            try_relative_time_at(timestamp, options.now)?
        } else {
            RelativeTime::from_timestamp_str(timestamp, options.now)
        };

        if options.json {
            let line = AgoLine {
                timestamp,
                relative,
            };
            serde_json::to_writer(&mut *out, &line)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", relative)?;
        }
    }

    Ok(())
}
