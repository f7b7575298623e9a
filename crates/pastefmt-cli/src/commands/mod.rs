//! Subcommand implementations.
//!
//! Commands write to a caller-supplied writer so they can be exercised
//! without a terminal.

pub mod ago;
pub mod config;
pub mod truncate;
