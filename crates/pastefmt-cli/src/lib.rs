//! Command-line front end for the pastefmt formatters
//!
//! This crate provides the `pastefmt` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use error::{CliError, CliResult};
