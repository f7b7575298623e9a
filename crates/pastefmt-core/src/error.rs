//! Formatting error types.

use thiserror::Error;

/// Result type for strict formatting operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors reported by the strict formatting entry points.
///
/// The lenient helpers never fail; they render degenerate values such as
/// `"NaN seconds ago"` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input is not a plain base-10 integer.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// Timestamp cannot be represented as a UTC datetime.
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    /// Timestamp lies after the reference time.
    #[error("timestamp is in the future: {seconds}")]
    FutureTimestamp { seconds: i64 },
}
