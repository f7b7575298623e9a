//! Core formatting helpers: relative times, text truncation, tracing setup

pub mod error;
pub mod relative;
pub mod tracing;
pub mod truncate;

pub use error::{FormatError, FormatResult};
pub use relative::{
    RelativeTime, TimeUnit, parse_epoch_seconds, relative_time, relative_time_at,
    try_relative_time_at,
};
pub use crate::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
pub use truncate::{
    ELLIPSIS, LengthUnit, truncate, truncate_signed, truncate_text, truncate_text_utf16,
};

#[cfg(test)]
mod golden_tests;
