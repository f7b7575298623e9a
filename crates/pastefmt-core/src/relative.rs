//! Relative time labels for paste timestamps.
//!
//! Paste listings carry their creation time as UNIX epoch seconds in text
//! form. This module turns such a value into a coarse English label like
//! `"3 hours ago"`, picking the largest unit (days, hours, minutes, seconds)
//! whose value reaches one.
//!
//! Two flavours are provided:
//! - the lenient helpers ([`relative_time`], [`relative_time_at`]) never fail
//!   and render unparsable input as `"NaN seconds ago"`;
//! - [`try_relative_time_at`] validates its input and reports a
//!   [`FormatError`] instead.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use pastefmt_core::relative::relative_time_at;
//!
//! let now = Utc.with_ymd_and_hms(2025, 2, 5, 12, 0, 0).unwrap();
//! let three_hours_ago = (now.timestamp() - 3 * 3600).to_string();
//! assert_eq!(relative_time_at(&three_hours_ago, now), "3 hours ago");
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

const MILLIS_PER_SECOND: f64 = 1000.0;
const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;
/// Largest distance from the epoch a browser `Date` can represent.
const MAX_DATE_MILLIS: f64 = 8.64e15;

/// Unit of a relative time label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    /// Returns the singular English label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Elapsed time expressed as a rounded count of a single unit.
///
/// `count` is `NaN` when the source timestamp could not be parsed, and may be
/// zero or negative for timestamps at or after the reference time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeTime {
    /// Rounded count in `unit`.
    pub count: f64,
    /// Coarsest unit whose unrounded value reached one.
    pub unit: TimeUnit,
}

impl RelativeTime {
    /// Computes the relative time between two epoch-millisecond values.
    ///
    /// Falls back to seconds whenever no larger unit reaches one, which also
    /// covers negative deltas and `NaN`.
    pub fn between(then_ms: f64, now_ms: f64) -> Self {
        let days = (now_ms - then_ms) / MILLIS_PER_DAY;
        let hours = days * 24.0;
        let minutes = hours * 60.0;
        let seconds = minutes * 60.0;

        let (value, unit) = if days >= 1.0 {
            (days, TimeUnit::Day)
        } else if hours >= 1.0 {
            (hours, TimeUnit::Hour)
        } else if minutes >= 1.0 {
            (minutes, TimeUnit::Minute)
        } else {
            (seconds, TimeUnit::Second)
        };

        Self {
            count: round_half_up(value),
            unit,
        }
    }

    /// Computes the relative time between two UTC datetimes.
    pub fn since(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::between(then.timestamp_millis() as f64, now.timestamp_millis() as f64)
    }

    /// Leniently parses `timestamp` (epoch seconds) and computes the relative
    /// time until `now`.
    ///
    /// Unparsable input and timestamps beyond ±8.64e15 ms (the range of a
    /// browser `Date`) yield a `NaN` count in seconds.
    pub fn from_timestamp_str(timestamp: &str, now: DateTime<Utc>) -> Self {
        let mut then_ms = parse_epoch_seconds(timestamp) * MILLIS_PER_SECOND;
        if then_ms.abs() > MAX_DATE_MILLIS {
            tracing::debug!(timestamp, "timestamp outside the representable date range");
            then_ms = f64::NAN;
        }
        Self::between(then_ms, now.timestamp_millis() as f64)
    }

    /// Returns `true` when the label uses the singular unit.
    pub fn is_singular(&self) -> bool {
        self.count == 1.0
    }

    /// Returns the count as an integer, or `None` when it is not finite.
    pub fn whole_count(&self) -> Option<i64> {
        self.count.is_finite().then_some(self.count as i64)
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count.is_nan() {
            f.write_str("NaN")?;
        } else if self.count.is_infinite() {
            f.write_str(if self.count > 0.0 { "Infinity" } else { "-Infinity" })?;
        } else {
            write!(f, "{}", self.count)?;
        }
        let plural = if self.is_singular() { "" } else { "s" };
        write!(f, " {}{} ago", self.unit, plural)
    }
}

impl Serialize for RelativeTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RelativeTime", 3)?;
        state.serialize_field("count", &self.whole_count())?;
        state.serialize_field("unit", &self.unit)?;
        state.serialize_field("text", &self.to_string())?;
        state.end()
    }
}

/// Parses epoch seconds from the leading integer of `input`.
///
/// Leading whitespace (Unicode `White_Space` minus U+0085, plus U+FEFF, as
/// browsers skip it) and a single `+`/`-` sign are accepted, then the longest
/// run of ASCII digits is used and anything after it is ignored. Returns `NaN`
/// when there are no digits.
pub fn parse_epoch_seconds(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(is_js_whitespace);
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        tracing::debug!(input, "timestamp has no leading digits");
        return f64::NAN;
    }
    if digits < rest.len() {
        tracing::trace!(input, ignored = &rest[digits..], "ignoring timestamp suffix");
    }

    let value: f64 = rest[..digits].parse().unwrap_or(f64::NAN);
    if negative { -value } else { value }
}

/// Whitespace skipped before a timestamp, matching browser integer parsing.
fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Formats the time elapsed since `timestamp` (epoch seconds) until now.
pub fn relative_time(timestamp: &str) -> String {
    relative_time_at(timestamp, Utc::now())
}

/// Formats the time elapsed since `timestamp` (epoch seconds) until `now`.
///
/// Never fails: unparsable input renders as `"NaN seconds ago"`.
pub fn relative_time_at(timestamp: &str, now: DateTime<Utc>) -> String {
    RelativeTime::from_timestamp_str(timestamp, now).to_string()
}

/// Strictly parses `timestamp` and computes the time elapsed until `now`.
///
/// # Errors
///
/// - [`FormatError::InvalidTimestamp`] unless the trimmed input is an
///   optionally signed base-10 integer that fits in an `i64`;
/// - [`FormatError::TimestampOutOfRange`] if it is not a valid UTC datetime;
/// - [`FormatError::FutureTimestamp`] if it lies after `now`.
pub fn try_relative_time_at(timestamp: &str, now: DateTime<Utc>) -> FormatResult<RelativeTime> {
    let seconds: i64 = timestamp
        .trim()
        .parse()
        .map_err(|_| FormatError::InvalidTimestamp(timestamp.to_string()))?;
    let then = DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or(FormatError::TimestampOutOfRange(seconds))?;
    if then > now {
        return Err(FormatError::FutureTimestamp { seconds });
    }
    Ok(RelativeTime::since(then, now))
}

/// Rounds to the nearest integer, ties toward positive infinity.
///
/// Negative zero is normalized to zero so it never renders as `-0`.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded + 0.0
}
